//! Candidate sampling tests: heading detection, link panel, text shaping.

mod common;

use common::{style, FakeNode, RecordingController};
use typesurvey_analysis::sampling::truncate_sample;
use typesurvey_analysis::{HeadingDetector, PanelKind, PseudoStateController, Sampler};
use typesurvey_core::config::SamplingConfig;
use typesurvey_core::types::StyleSnapshot;

fn baseline() -> StyleSnapshot {
    StyleSnapshot::new().with("font-size", "16px")
}

fn detector() -> HeadingDetector {
    HeadingDetector::new(vec!["font-size".to_string()], baseline())
}

#[test]
fn test_heading_tags_always_qualify() {
    let detector = detector();
    for tag in ["H1", "h2", "H6", "HEADER"] {
        let node = FakeNode::new(tag, "x", style("16px", "400", "rgb(0, 0, 0)"));
        assert!(detector.is_heading(&node), "{tag} should be a heading");
    }
    let node = FakeNode::new("H7", "x", style("16px", "400", "rgb(0, 0, 0)"));
    assert!(!detector.is_heading(&node));
}

#[test]
fn test_script_and_style_never_qualify() {
    let detector = detector();
    for tag in ["SCRIPT", "style"] {
        let node = FakeNode::new(tag, "x", style("40px", "400", "rgb(0, 0, 0)"));
        assert!(!detector.is_heading(&node));
    }
}

#[test]
fn test_styled_text_qualifies_when_trigger_differs() {
    let detector = detector();
    let styled = FakeNode::new("DIV", "Big", style("28px", "400", "rgb(0, 0, 0)"));
    let plain = FakeNode::new("DIV", "Body", style("16px", "400", "rgb(0, 0, 0)"));

    assert!(detector.is_heading(&styled));
    assert!(!detector.is_heading(&plain));
}

#[test]
fn test_nodes_without_leading_text_are_skipped() {
    let detector = detector();
    let wrapper = FakeNode::new("DIV", "Big", style("28px", "400", "rgb(0, 0, 0)"))
        .without_leading_text();
    let blank = FakeNode {
        leading: Some("   ".to_string()),
        ..FakeNode::new("DIV", "Big", style("28px", "400", "rgb(0, 0, 0)"))
    };

    assert!(!detector.is_heading(&wrapper));
    assert!(!detector.is_heading(&blank));
}

#[test]
fn test_headings_panel_samples_without_expansion() {
    let sampler = Sampler::new(&SamplingConfig::default(), baseline());
    let nodes = vec![
        FakeNode::new("H1", "Title", style("32px", "700", "rgb(0, 0, 0)")),
        FakeNode::new("P", "Body", style("16px", "400", "rgb(0, 0, 0)")),
        FakeNode::new("A", "Link", style("16px", "400", "rgb(0, 0, 238)")),
        FakeNode::new("H2", "", style("24px", "700", "rgb(0, 0, 0)")),
    ];
    let mut controller = RecordingController::default();

    let observations = sampler.sample(
        PanelKind::Headings,
        &nodes,
        Some(&mut controller as &mut dyn PseudoStateController<FakeNode>),
    );

    assert_eq!(observations.len(), 1);
    assert_eq!(observations[0].tag, "H1");
    assert!(controller.history.is_empty());
}

#[test]
fn test_links_panel_expands_links_only() {
    let sampler = Sampler::new(&SamplingConfig::default(), baseline());
    let nodes = vec![
        FakeNode::new("H1", "Title", style("32px", "700", "rgb(0, 0, 0)")),
        FakeNode::new("a", "One", style("16px", "400", "rgb(0, 0, 238)")),
        FakeNode::new("A", "Two", style("16px", "400", "rgb(0, 0, 238)")),
    ];
    let mut controller = RecordingController::default();

    let observations = sampler.sample(
        PanelKind::Links,
        &nodes,
        Some(&mut controller as &mut dyn PseudoStateController<FakeNode>),
    );

    assert_eq!(observations.len(), 8);
    assert!(observations.iter().all(|o| o.tag.eq_ignore_ascii_case("a")));
}

#[test]
fn test_sampled_style_is_restricted_to_configured_properties() {
    let config = SamplingConfig {
        properties: vec!["font-size".to_string()],
        ..Default::default()
    };
    let sampler = Sampler::new(&config, baseline());
    let nodes = vec![FakeNode::new("H1", "Title", style("32px", "700", "rgb(0, 0, 0)"))];

    let observations = sampler.sample(PanelKind::Headings, &nodes, None);

    assert_eq!(observations[0].style.len(), 1);
    assert_eq!(observations[0].style.get("font-size"), Some("32px"));
}

#[test]
fn test_sample_text_is_truncated() {
    let config = SamplingConfig {
        sample_text_max_chars: Some(5),
        ..Default::default()
    };
    let sampler = Sampler::new(&config, baseline());
    let nodes = vec![FakeNode::new("H1", "  Hello world ", style("32px", "700", "rgb(0, 0, 0)"))];

    let observations = sampler.sample(PanelKind::Headings, &nodes, None);

    assert_eq!(observations[0].sample_text, "Hello...");
    assert_eq!(truncate_sample("  Hello world ", 256), "Hello world");
}
