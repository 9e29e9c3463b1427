// Host-side tests for suit name and version generation.

use exo_core::SuitNamer;

#[test]
fn same_seed_same_names() {
    let mut a = SuitNamer::new(42);
    let mut b = SuitNamer::new(42);
    for _ in 0..10 {
        assert_eq!(a.suit_name(), b.suit_name());
        assert_eq!(a.version_id(), b.version_id());
    }
}

#[test]
fn version_id_is_six_base36_chars() {
    let mut namer = SuitNamer::new(7);
    for _ in 0..100 {
        let id = namer.version_id();
        assert_eq!(id.len(), 6);
        assert!(
            id.chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()),
            "bad id {id}"
        );
    }
}

#[test]
fn names_have_model_suffix() {
    let mut namer = SuitNamer::new(3);
    let mut with_middle = 0;
    for _ in 0..200 {
        let name = namer.suit_name();
        let (base, model) = name.split_once('-').expect("prefix-model");
        assert!(!model.is_empty());
        match base.split(' ').count() {
            1 => {}
            2 => with_middle += 1,
            n => panic!("unexpected {n} words in {name}"),
        }
    }
    // Middle word appears with probability 0.65.
    assert!((80..=180).contains(&with_middle), "{with_middle}/200 had a middle word");
}

#[test]
fn entropy_namer_produces_valid_output() {
    let mut namer = SuitNamer::from_entropy();
    assert_eq!(namer.version_id().len(), 6);
    assert!(namer.suit_name().contains('-'));
}
