// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod catalog;
mod identification;
mod menu;
mod observability;
mod profile;
mod registration;
mod role;
mod secondary_validation;
mod session;
mod stats;
mod str_utils;

// This is the public API of the campus core library
pub use catalog::{
    attach_responsables, filter_events, published, responsable_ids, Audience, Career,
    CatalogFilter, Event, EventState, EventType, EventWithResponsable, NewEvent, NewEventError,
    PaymentFilter, ResponsableSummary, ValidatedNewEvent,
};
pub use identification::{
    classify_identification, is_acceptable_foreign_document, validate_identification,
    IdentificationError, IdentificationKind, FOREIGN_DOCUMENT_MIN_LENGTH,
};
pub use menu::{
    default_sidebar, filter_by_role, filter_items, FilteredMenu, ItemNode, MenuConfig,
    MenuConfigError, MenuNode, SectionNode,
};
pub use observability::labels::Labels;
pub use profile::{
    search_responsables, NewUser, NewUserError, ProfileChanges, ProfileUpdate, ProfileUpdateError,
    ResponsableCandidate, UserProfile, ValidatedNewUser, MIN_SEARCH_LENGTH,
};
pub use registration::{
    accepts_phone_keystroke, validate_registration, RegistrationError, RegistrationForm,
    RegistrationPolicy, RegistrationPolicyBuilder, RegistrationPolicyError, RegistrationValidator,
    ValidatedRegistration,
};
pub use role::Role;
pub use secondary_validation::{is_valid_national_id, EcuadorCedulaChecksum, Validator};
pub use session::{RouteDecision, RouteGuard, Session, SessionProfile, SessionUser};
