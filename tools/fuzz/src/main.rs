use afl::fuzz;
use campus_core::{
    classify_identification, filter_by_role, is_valid_national_id, validate_identification,
    IdentificationKind, ItemNode, MenuNode, Role, SectionNode,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

#[cfg(not(feature = "manual_test"))]
fn main() {
    fuzz!(|data: &[u8]| {
        run_raw_fuzz(data);
    });
}

#[cfg(feature = "manual_test")]
fn main() {
    use std::io::{stdin, Read};

    let mut input = vec![];
    stdin().read_to_end(&mut input).unwrap();
    run_raw_fuzz(&input);
}

fn split_bytes_once(input: &[u8]) -> Option<(&[u8], &[u8])> {
    if let Some(i) = input.iter().position(|b| *b == b',') {
        Some((&input[0..i], &input[i + 1..]))
    } else {
        None
    }
}

fn run_raw_fuzz(bytes: &[u8]) -> Option<()> {
    let (input, rand_seed) = split_bytes_once(bytes)?;
    let input_str = std::str::from_utf8(input).ok()?;

    let mut rng_seed: u64 = 0;
    for byte in rand_seed.iter().take(8) {
        rng_seed <<= 8;
        rng_seed += *byte as u64;
    }

    fuzz_identification(input_str);
    fuzz_menu_filter(StdRng::seed_from_u64(rng_seed));
    Some(())
}

fn fuzz_identification(input: &str) {
    #[cfg(feature = "manual_test")]
    println!("Identification: {:?}", input);

    let valid = is_valid_national_id(input);
    if valid {
        assert_eq!(classify_identification(input), IdentificationKind::NationalId);
    }
    if classify_identification(input) == IdentificationKind::NationalId {
        assert_eq!(validate_identification(input).is_ok(), valid);
    }
}

fn gen_roles(rng: &mut StdRng) -> Vec<Role> {
    match rng.gen_range::<u8, _>(0..4) {
        0 => vec![],
        1 => vec![Role::Administrador],
        2 => vec![Role::General],
        _ => vec![Role::Administrador, Role::General],
    }
}

fn gen_items(rng: &mut StdRng, depth: u32) -> Vec<ItemNode> {
    let count = rng.gen_range(0..6);
    (0..count)
        .map(|i| {
            let mut item = ItemNode::new(format!("item-{depth}-{i}"), format!("/{depth}/{i}"))
                .allowed_roles(gen_roles(rng));
            if depth < 3 && rng.gen_bool(0.4) {
                item = item.children(gen_items(rng, depth + 1));
            }
            item
        })
        .collect()
}

fn gen_role(rng: &mut StdRng) -> Option<Role> {
    match rng.gen_range::<u8, _>(0..3) {
        0 => None,
        1 => Some(Role::Administrador),
        _ => Some(Role::General),
    }
}

fn fuzz_menu_filter(mut rng: StdRng) {
    let tree: Vec<MenuNode> = (0..rng.gen_range(0..4))
        .map(|i| {
            if rng.gen_bool(0.5) {
                SectionNode::new(format!("section-{i}"), gen_items(&mut rng, 1)).into()
            } else {
                let mut items = gen_items(&mut rng, 1);
                match items.pop() {
                    Some(item) => item.into(),
                    None => ItemNode::new("fallback", "/").into(),
                }
            }
        })
        .collect();
    let role = gen_role(&mut rng);

    #[cfg(feature = "manual_test")]
    println!("Tree: {:?}\nRole: {:?}", tree, role);

    let filtered = filter_by_role(&tree, role);
    assert_eq!(filter_by_role(&filtered, role), filtered);
    assert!(filtered.len() <= tree.len());
}
