// Host-side tests for the power card layout.

use exo_core::card::*;
use exo_core::*;

fn stats_with(total: StatProfile) -> SuitStats {
    SuitStats {
        total,
        score: total.score(),
        tier: Tier::from_score(total.score()),
    }
}

#[test]
fn bar_ratio_saturates() {
    assert_eq!(bar_ratio(0), 0.0);
    assert!((bar_ratio(70) - 0.5).abs() < 1e-9);
    assert_eq!(bar_ratio(140), 1.0);
    assert_eq!(bar_ratio(500), 1.0);
}

#[test]
fn file_name_collapses_whitespace() {
    assert_eq!(file_name("Nova Flux-MK-II", "A1B2C3"), "Nova_Flux-MK-II_A1B2C3.png");
    assert_eq!(file_name("  Ion \t  Core-X7 ", "000000"), "Ion_Core-X7_000000.png");
    assert_eq!(file_name("Titan-9", "ZZZZZZ"), "Titan-9_ZZZZZZ.png");
}

#[test]
fn card_text_lines() {
    let stats = compute_suit_stats(&SuitSelection::default());
    let card = PowerCard::new("Aegis Prime-VX", "Q7W2ZK", &stats);
    assert_eq!((card.width, card.height), (1080, 1350));
    assert_eq!(card.title, "Aegis Prime-VX");
    assert_eq!(card.version_line, "Version Q7W2ZK");
    assert_eq!(card.tier_line, "S Tier");
    assert_eq!(card.file_name, "Aegis_Prime-VX_Q7W2ZK.png");
}

#[test]
fn stat_rows_layout() {
    let card = PowerCard::new("X", "000000", &stats_with(StatProfile::new(140, 70, 0, 280, 35)));
    let labels: Vec<_> = card.rows.iter().map(|r| r.label).collect();
    assert_eq!(labels, ["Power", "Speed", "Defense", "Intelligence", "Energy Output"]);

    for (i, row) in card.rows.iter().enumerate() {
        assert_eq!(row.y, 980.0 + 60.0 * i as f64);
        assert_eq!(row.track.x, 330.0);
        assert_eq!(row.track.w, 600.0);
        assert_eq!(row.fill.x, row.track.x);
        assert!(row.fill.w <= row.track.w);
    }
    let widths: Vec<f64> = card.rows.iter().map(|r| r.fill.w).collect();
    assert_eq!(widths[0], 600.0);
    assert!((widths[1] - 300.0).abs() < 1e-9);
    assert_eq!(widths[2], 0.0);
    assert_eq!(widths[3], 600.0, "over-scale stats clamp to a full bar");
}

#[test]
fn image_sits_inside_frame() {
    let card = PowerCard::new("X", "000000", &compute_suit_stats(&SuitSelection::default()));
    let img = card.image_rect();
    assert_eq!((img.x, img.y, img.w, img.h), (95.0, 235.0, 890.0, 670.0));
    assert!(img.x + img.w <= IMAGE_FRAME.x + IMAGE_FRAME.w);
    assert!(img.y + img.h <= IMAGE_FRAME.y + IMAGE_FRAME.h);
}
