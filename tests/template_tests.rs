use site_basics::ScreenError;
use site_basics::screen::strings;
use site_basics::text::composer::{Composer, TemplateMode};
use site_basics::text::interpolate::{interpolate, tag_map};
use site_basics::text::rich_text::{ElementTemplate, Node, RichText};
use site_basics::text::template::{Fragment, Segment, Template, TemplateError};

fn em_map() -> site_basics::text::interpolate::TagMap {
    tag_map([("em", ElementTemplate::new("em"))])
}

// =========================================================================
// Template parsing
// =========================================================================

#[test]
fn slot_count_positional_and_sequential() {
    assert_eq!(Template::parse("no slots").unwrap().slot_count(), 0);
    assert_eq!(Template::parse("%s and %s").unwrap().slot_count(), 2);
    assert_eq!(Template::parse("%1$s%3$s%2$s").unwrap().slot_count(), 3);
    assert_eq!(Template::parse("%1$sA%2$s %1$sB%2$s").unwrap().slot_count(), 2, "Reuse counts once");
    assert_eq!(Template::parse("%2$s only").unwrap().slot_count(), 2, "Highest index wins");
    assert_eq!(Template::parse(strings::OPEN_GRAPH_DISABLED).unwrap().slot_count(), 4);
}

#[test]
fn percent_escape_is_literal() {
    let t = Template::parse("100%% of %s").unwrap();
    assert_eq!(t.slot_count(), 1);
    assert_eq!(t.format(&["sites"]).unwrap(), "100% of sites");
}

#[test]
fn invalid_directives_are_errors() {
    assert_eq!(
        Template::parse("50% off"),
        Err(TemplateError::InvalidDirective { offset: 2 })
    );
    assert!(Template::parse("%0$s").is_err(), "Positions start at 1");
    assert!(Template::parse("%1$x").is_err());
    assert!(Template::parse("trailing %").is_err());
}

#[test]
fn segments_keep_unicode_literals() {
    let t = Template::parse("\u{2018}%1$s\u{2019}").unwrap();
    assert_eq!(
        t.segments(),
        &[
            Segment::Literal("\u{2018}".to_string()),
            Segment::Slot(0),
            Segment::Literal("\u{2019}".to_string()),
        ]
    );
}

// =========================================================================
// Filling
// =========================================================================

#[test]
fn fill_preserves_slot_order() {
    let t = Template::parse("A=%1$s, B=%2$s").unwrap();
    let out = t.fill(&["x".into(), "y".into()]).unwrap();
    let plain = out.to_plain_text();
    assert_eq!(plain, "A=x, B=y");
    assert!(plain.find('x').unwrap() < plain.find('y').unwrap());
}

#[test]
fn fill_with_markup_fragment() {
    let strong = RichText::from_nodes(vec![ElementTemplate::new("strong").instantiate(vec![Node::Text {
        text: "1200x675px".to_string(),
    }])]);
    let t = Template::parse("Size: %1$s (%2$s)").unwrap();
    let out = t.fill(&[Fragment::Markup(strong), "min".into()]).unwrap();
    assert_eq!(out.to_html(), "Size: <strong>1200x675px</strong> (min)");
    assert_eq!(out.nodes.len(), 3);
}

#[test]
fn mismatch_is_reported() {
    let t = Template::parse("%1$s then %2$s").unwrap();
    assert_eq!(
        t.fill(&["only one".into()]),
        Err(TemplateError::SlotMismatch {
            expected: 2,
            supplied: 1
        })
    );
    assert_eq!(
        t.format(&["a", "b", "c"]),
        Err(TemplateError::SlotMismatch {
            expected: 2,
            supplied: 3
        })
    );
}

// =========================================================================
// Interpolation
// =========================================================================

#[test]
fn interpolate_builds_elements() {
    let out = interpolate("Use <em>Site title</em> and <em>Tagline</em>.", &em_map()).unwrap();
    assert_eq!(out.to_plain_text(), "Use Site title and Tagline.");
    assert_eq!(out.to_html(), "Use <em>Site title</em> and <em>Tagline</em>.");
}

#[test]
fn interpolate_nested_and_self_closing() {
    let tags = tag_map([
        ("a", ElementTemplate::new("a").with_attr("href", "https://x.test/?a=1&b=2")),
        ("strong", ElementTemplate::new("strong")),
        ("br", ElementTemplate::new("br")),
    ]);
    let out = interpolate("<a>go <strong>now</strong></a><br/>", &tags).unwrap();
    assert_eq!(
        out.to_html(),
        "<a href=\"https://x.test/?a=1&amp;b=2\">go <strong>now</strong></a><br></br>"
    );
}

#[test]
fn interpolate_leaves_stray_angle_brackets() {
    let out = interpolate("1 < 2 and <3", &em_map()).unwrap();
    assert_eq!(out.to_plain_text(), "1 < 2 and <3");
    assert_eq!(out.to_html(), "1 &lt; 2 and &lt;3");
}

#[test]
fn interpolate_errors() {
    assert_eq!(
        interpolate("<b>bold</b>", &em_map()),
        Err(TemplateError::UnknownTag("b".to_string()))
    );
    assert_eq!(
        interpolate("<em>open", &em_map()),
        Err(TemplateError::UnbalancedTag("em".to_string()))
    );
    assert_eq!(
        interpolate("close</em>", &em_map()),
        Err(TemplateError::UnbalancedTag("em".to_string()))
    );
}

// =========================================================================
// Composer modes
// =========================================================================

#[test]
fn strict_mode_fails_loudly() {
    let mut composer = Composer::new(TemplateMode::Strict);
    let result = composer.markup(
        "open-graph-disabled",
        strings::OPEN_GRAPH_DISABLED,
        &["<em>", "</em>"],
        &em_map(),
    );
    match result {
        Err(ScreenError::Template { text_id, source }) => {
            assert_eq!(text_id, "open-graph-disabled");
            assert_eq!(
                source,
                TemplateError::SlotMismatch {
                    expected: 4,
                    supplied: 2
                }
            );
        }
        other => panic!("Expected Template error, got {:?}", other),
    }
    assert!(composer.diagnostics().is_empty());
}

#[test]
fn lenient_mode_falls_back_to_raw_template() {
    let mut composer = Composer::new(TemplateMode::Lenient);
    let out = composer
        .markup(
            "open-graph-disabled",
            strings::OPEN_GRAPH_DISABLED,
            &["<em>", "</em>"],
            &em_map(),
        )
        .unwrap();
    assert_eq!(out.to_plain_text(), strings::OPEN_GRAPH_DISABLED);

    let diagnostics = composer.into_diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].text_id, "open-graph-disabled");
    assert!(diagnostics[0].message.contains("4 slots"));
}

#[test]
fn composer_fill_success_records_nothing() {
    let mut composer = Composer::new(TemplateMode::Lenient);
    let out = composer
        .fill("pair", "%1$s before %2$s", &["x".into(), "y".into()])
        .unwrap();
    assert_eq!(out.to_plain_text(), "x before y");
    assert!(composer.diagnostics().is_empty());
}

#[test]
fn composer_fill_mismatch_in_lenient_mode() {
    let mut composer = Composer::new(TemplateMode::Lenient);
    let out = composer.fill("pair", "[%1$s|%2$s]", &["x".into()]).unwrap();
    assert_eq!(out, RichText::plain("[%1$s|%2$s]"));
    assert_eq!(composer.diagnostics().len(), 1);
}
