//! Integration tests for class-name lexing.
//!
//! Covers the split priority end to end:
//! - modifiers: `!` important, leading `-` negative
//! - variant chains and whole-name utilities
//! - arbitrary values and properties, including colon-bearing values
//! - compound prefixes, opacity modifiers, fractions
//! - grouped-notation expansion and content extraction

use zephyr_parse::{extract_classes, parse_class, Expander, Parser};

// ============================================================================
// MODIFIERS
// ============================================================================

#[test]
fn test_important_strips_one_bang() {
    let token = parse_class("!p-4");
    assert!(token.important);
    assert_eq!(token.raw, "!p-4");
    assert_eq!(token.utility, "p");
}

#[test]
fn test_important_before_variants() {
    let token = parse_class("!md:flex");
    assert!(token.important);
    assert_eq!(token.variants, vec!["md"]);
    assert_eq!(token.utility, "flex");
}

#[test]
fn test_negative_spacing() {
    let token = parse_class("-mt-2");
    assert_eq!(token.utility, "mt");
    assert_eq!(token.value.as_deref(), Some("-2"));
}

#[test]
fn test_negative_unthemed_literal() {
    let token = parse_class("-m-13px");
    assert_eq!(token.utility, "m");
    assert_eq!(token.value.as_deref(), Some("-13px"));
}

// ============================================================================
// VARIANTS AND WHOLE NAMES
// ============================================================================

#[test]
fn test_variants_keep_written_order() {
    let token = parse_class("dark:sm:hover:underline");
    assert_eq!(token.variants, vec!["dark", "sm", "hover"]);
    assert_eq!(token.utility, "underline");
    assert_eq!(token.value, None);
}

#[test]
fn test_whole_names_never_split() {
    for name in ["inline-flex", "flex-col-reverse", "table-row-group", "sr-only"] {
        let token = parse_class(name);
        assert_eq!(token.utility, name);
        assert_eq!(token.value, None);
    }
}

// ============================================================================
// ARBITRARY FORMS
// ============================================================================

#[test]
fn test_arbitrary_value() {
    let token = parse_class("max-w-[28rem]");
    assert!(token.arbitrary);
    assert_eq!(token.utility, "max-w");
    assert_eq!(token.value.as_deref(), Some("28rem"));
}

#[test]
fn test_arbitrary_value_with_colons_and_variants() {
    let token = parse_class("sm:bg-[url(https://a.io/i.png)]");
    assert!(token.arbitrary);
    assert_eq!(token.variants, vec!["sm"]);
    assert_eq!(token.utility, "bg");
    assert_eq!(token.value.as_deref(), Some("url(https://a.io/i.png)"));
}

#[test]
fn test_arbitrary_property() {
    let token = parse_class("[mask-type:alpha]");
    assert!(token.arbitrary);
    assert_eq!(token.utility, "mask-type");
    assert_eq!(token.value.as_deref(), Some("alpha"));
}

#[test]
fn test_unbalanced_bracket_degrades_to_generic_split() {
    let token = parse_class("w-[100px");
    assert!(!token.arbitrary);
    assert_eq!(token.utility, "w");
    assert_eq!(token.value.as_deref(), Some("[100px"));
}

// ============================================================================
// COMPOUND PREFIXES, OPACITY, FRACTIONS
// ============================================================================

#[test]
fn test_compound_prefixes() {
    let cases = [
        ("grid-cols-12", "grid-cols", "12"),
        ("col-span-2", "col-span", "2"),
        ("auto-rows-min", "auto-rows", "min"),
        ("rounded-tl-lg", "rounded-tl", "lg"),
        ("border-b-4", "border-b", "4"),
        ("ring-offset-2", "ring-offset", "2"),
        ("scroll-pb-6", "scroll-pb", "6"),
    ];
    for (raw, utility, value) in cases {
        let token = parse_class(raw);
        assert_eq!(token.utility, utility, "{raw}");
        assert_eq!(token.value.as_deref(), Some(value), "{raw}");
    }
}

#[test]
fn test_opacity_modifier_on_color_utilities() {
    for (raw, utility, value) in [
        ("bg-blue-500/50", "bg", "blue-500/50"),
        ("text-gray-900/75", "text", "gray-900/75"),
        ("divide-red-200/25", "divide", "red-200/25"),
    ] {
        let token = parse_class(raw);
        assert_eq!(token.utility, utility);
        assert_eq!(token.value.as_deref(), Some(value));
    }
}

#[test]
fn test_fraction_kept_verbatim() {
    let token = parse_class("w-2/3");
    assert_eq!(token.utility, "w");
    assert_eq!(token.value.as_deref(), Some("2/3"));
}

#[test]
fn test_fraction_with_compound_prefix() {
    let token = parse_class("translate-y-1/4");
    assert_eq!(token.utility, "translate-y");
    assert_eq!(token.value.as_deref(), Some("1/4"));
}

// ============================================================================
// SESSION CACHE
// ============================================================================

#[test]
fn test_parser_session_caches_and_agrees_with_free_function() {
    let parser = Parser::new();
    for raw in ["p-4", "p-4", "sm:flex", "-m-2", "p-4"] {
        assert_eq!(parser.parse(raw), parse_class(raw));
    }
    assert_eq!(parser.cached(), 3);
}

// ============================================================================
// GROUPED NOTATION THROUGH THE LEXER
// ============================================================================

#[test]
fn test_expansion_feeds_canonical_names() {
    let expander = Expander::new(true, false);
    let expanded = expander.expand("sm:p[2 -4 8!]").unwrap();
    assert_eq!(expanded, vec!["sm:p-2", "sm:-p-4", "!sm:p-8"]);

    let signs: Vec<_> = expanded.iter().map(|c| parse_class(c)).collect();
    assert_eq!(signs[0].variants, vec!["sm"]);
    assert_eq!(signs[1].value.as_deref(), Some("-4"));
    assert!(signs[2].important);
}

// ============================================================================
// EXTRACTION
// ============================================================================

#[test]
fn test_extraction_end_to_end() {
    let source = r#"
        <div class="flex p-4 sm:p-8">
            <a class='hover:underline w-[100px]'>x</a>
            <b className={`font-bold ${dynamic} p-4`}>y</b>
        </div>
    "#;
    assert_eq!(
        extract_classes(source),
        vec![
            "flex",
            "p-4",
            "sm:p-8",
            "hover:underline",
            "w-[100px]",
            "font-bold",
        ]
    );
}
