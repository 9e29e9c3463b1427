// Host-side tests for armor geometry.

use exo_core::armor::*;
use exo_core::*;

fn v(i: u8) -> Variant {
    Variant::new(i).unwrap()
}

fn all_selections() -> Vec<SuitSelection> {
    let mut out = Vec::new();
    for h in 0..3 {
        for c in 0..3 {
            for a in 0..3 {
                for l in 0..3 {
                    out.push(
                        SuitSelection::new()
                            .with(Section::Helmet, v(h))
                            .with(Section::Chest, v(c))
                            .with(Section::Arms, v(a))
                            .with(Section::Legs, v(l)),
                    );
                }
            }
        }
    }
    out
}

#[test]
fn every_build_has_visor_and_core() {
    for sel in all_selections() {
        let pieces = build_armor(&sel);
        let visors = pieces.iter().filter(|p| p.finish == Finish::Visor).count();
        let cores = pieces.iter().filter(|p| p.finish == Finish::Core).count();
        assert_eq!((visors, cores), (1, 1), "{sel:?}");
        for section in Section::ALL {
            assert!(pieces.iter().any(|p| p.section == section));
        }
    }
}

#[test]
fn limbs_are_mirrored_pairs() {
    for sel in all_selections() {
        for section in [Section::Arms, Section::Legs] {
            let limbs: Vec<_> = build_armor(&sel)
                .into_iter()
                .filter(|p| p.section == section)
                .collect();
            assert_eq!(limbs.len(), 2);
            let (l, r) = (limbs[0], limbs[1]);
            assert_eq!(l.primitive, r.primitive);
            assert!((l.position.x + r.position.x).abs() < 1e-6);
            assert_eq!(l.position.y, r.position.y);
            assert!(l.position.x < 0.0 && r.position.x > 0.0);
        }
    }
}

#[test]
fn pieces_cluster_around_section_anchor() {
    let pieces = build_armor(&SuitSelection::default());
    for p in &pieces {
        let anchor = section_anchor(p.section);
        assert!(p.position.distance(anchor) < 1.0, "{:?} too far from anchor", p);
    }
}

#[test]
fn variant_change_only_touches_its_section() {
    let base = build_armor(&SuitSelection::default());
    let changed = build_armor(&SuitSelection::default().with(Section::Chest, v(2)));
    let others = |ps: &[ArmorPiece]| {
        ps.iter()
            .filter(|p| p.section != Section::Chest)
            .copied()
            .collect::<Vec<_>>()
    };
    assert_eq!(others(&base), others(&changed));
    assert_ne!(base, changed);
}

#[test]
fn wireframes_are_finite_and_yaw_preserves_height() {
    for piece in build_armor(&SuitSelection::default()) {
        let still = piece.segments(0.0);
        let spun = piece.segments(1.3);
        assert!(!still.is_empty());
        assert_eq!(still.len(), spun.len());
        for ([a0, b0], [a1, b1]) in still.iter().zip(&spun) {
            assert!(a0.is_finite() && b0.is_finite());
            assert!((a0.y - a1.y).abs() < 1e-4 && (b0.y - b1.y).abs() < 1e-4);
        }
    }
}
