// Host-side tests for stat aggregation and tiering.

use exo_core::*;

fn v(i: u8) -> Variant {
    Variant::new(i).unwrap()
}

/// Profile scoring exactly `total`, spread over the five axes.
fn part(total: u32) -> StatProfile {
    let base = total / 5;
    StatProfile::new(base + total - base * 5, base, base, base, base)
}

#[test]
fn default_build_matches_table() {
    let stats = compute_suit_stats(&SuitSelection::default());
    assert_eq!(stats.total, StatProfile::new(87, 67, 80, 62, 81));
    assert_eq!(stats.score, 377);
    assert_eq!(stats.tier, Tier::S);
}

#[test]
fn compute_is_pure() {
    let sel = SuitSelection::default()
        .with(Section::Chest, v(2))
        .with(Section::Legs, v(1));
    let a = compute_suit_stats(&sel);
    let b = compute_suit_stats(&sel);
    assert_eq!(a, b);
}

#[test]
fn changing_one_section_changes_only_its_contribution() {
    let catalog = StatCatalog::builtin();
    let base = SuitSelection::default();
    for section in Section::ALL {
        for i in 1..Variant::COUNT {
            let changed = base.with(section, v(i));
            let before = catalog.compute(&base).total;
            let after = catalog.compute(&changed).total;
            let expected = before.score() - catalog.profile(section, v(0)).score()
                + catalog.profile(section, v(i)).score();
            assert_eq!(after.score(), expected, "{section} -> V{}", i + 1);

            let old = catalog.profile(section, v(0));
            let new = catalog.profile(section, v(i));
            assert_eq!(after.power + old.power, before.power + new.power);
            assert_eq!(after.energy + old.energy, before.energy + new.energy);
        }
    }
}

#[test]
fn tier_lower_bounds_are_inclusive() {
    let sel = SuitSelection::default();
    for (per_part, tier) in [(80, Tier::S), (65, Tier::A), (50, Tier::B)] {
        let at = StatCatalog::uniform(part(per_part)).compute(&sel);
        assert_eq!(at.score, per_part * 4);
        assert_eq!(at.tier, tier, "score {}", at.score);

        // Knock one point off a single part.
        let below = StatCatalog::uniform(part(per_part))
            .with_profile(Section::Helmet, v(0), part(per_part - 1))
            .compute(&sel);
        assert_eq!(below.score, per_part * 4 - 1);
        assert!(below.tier < tier, "score {} should drop below {tier}", below.score);
    }
}

#[test]
fn tier_from_score_boundaries() {
    assert_eq!(Tier::from_score(320), Tier::S);
    assert_eq!(Tier::from_score(319), Tier::A);
    assert_eq!(Tier::from_score(260), Tier::A);
    assert_eq!(Tier::from_score(259), Tier::B);
    assert_eq!(Tier::from_score(200), Tier::B);
    assert_eq!(Tier::from_score(199), Tier::C);
    assert_eq!(Tier::from_score(0), Tier::C);
}

#[test]
fn custom_breakpoints() {
    let bp = TierBreakpoints { s: 400, a: 300, b: 100 };
    let stats = StatCatalog::builtin()
        .with_breakpoints(bp)
        .compute(&SuitSelection::default());
    assert_eq!(stats.tier, Tier::A);
    assert_eq!(bp.tier_for(99), Tier::C);
}

#[test]
fn huge_profiles_saturate_instead_of_overflowing() {
    let big = u32::MAX / 2;
    let stats = StatCatalog::uniform(StatProfile::new(big, big, 0, 0, 1))
        .with_profile(Section::Legs, v(0), StatProfile::new(u32::MAX, 0, 0, 0, 1))
        .compute(&SuitSelection::default());
    assert_eq!(stats.total.power, u32::MAX);
    assert_eq!(stats.total.speed, u32::MAX);
    assert_eq!(stats.total.energy, 4);
    assert_eq!(stats.score, u32::MAX);
    assert_eq!(stats.tier, Tier::S);
}

#[test]
fn tiers_are_ordered() {
    assert!(Tier::S > Tier::A && Tier::A > Tier::B && Tier::B > Tier::C);
    assert_eq!(Tier::S.to_string(), "S");
}

#[test]
fn variant_cycles_wrap_both_ways() {
    assert_eq!(v(2).cycled(1), v(0));
    assert_eq!(v(0).cycled(-1), v(2));
    assert_eq!(v(1).cycled(3), v(1));
    assert!(Variant::new(Variant::COUNT).is_none());
    assert_eq!(v(0).to_string(), "V1");
}

#[test]
fn selection_cycle_touches_one_section() {
    let mut sel = SuitSelection::new();
    let got = sel.cycle(Section::Arms, 1);
    assert_eq!(got, v(1));
    assert_eq!(sel[Section::Arms], v(1));
    for s in [Section::Helmet, Section::Chest, Section::Legs] {
        assert_eq!(sel.get(s), v(0));
    }
}

#[test]
fn section_navigation_wraps() {
    assert_eq!(Section::Helmet.offset(-1), Section::Legs);
    assert_eq!(Section::Legs.offset(1), Section::Helmet);
    assert_eq!(Section::Chest.offset(2), Section::Legs);
    assert_eq!(Section::from_name("ARMS"), Some(Section::Arms));
    assert_eq!(Section::from_name("shoulders"), None);
}
