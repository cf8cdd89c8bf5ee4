//! Padding, margin, and between-children spacing.

use zephyr_parse::ParsedClass;

use super::RuleOutput;
use crate::theme::Theme;
use crate::value;

/// Selector for the "all children after the first" pattern used by the
/// `space-*` and `divide-*` utilities.
pub(super) const BETWEEN_CHILDREN: &str = "> :not([hidden]) ~ :not([hidden])";

pub(super) fn resolve(token: &ParsedClass, theme: &Theme) -> Option<RuleOutput> {
    let sides: &[&str] = match token.utility.as_str() {
        "p" => &["padding"],
        "px" => &["padding-left", "padding-right"],
        "py" => &["padding-top", "padding-bottom"],
        "pt" => &["padding-top"],
        "pr" => &["padding-right"],
        "pb" => &["padding-bottom"],
        "pl" => &["padding-left"],
        "m" => &["margin"],
        "mx" => &["margin-left", "margin-right"],
        "my" => &["margin-top", "margin-bottom"],
        "mt" => &["margin-top"],
        "mr" => &["margin-right"],
        "mb" => &["margin-bottom"],
        "ml" => &["margin-left"],
        "space-x" => return space_x(token, theme),
        "space-y" => return space_y(token, theme),
        "space-x-reverse" => {
            return Some(
                RuleOutput::single("--zp-space-x-reverse", "1").with_child(BETWEEN_CHILDREN),
            );
        }
        "space-y-reverse" => {
            return Some(
                RuleOutput::single("--zp-space-y-reverse", "1").with_child(BETWEEN_CHILDREN),
            );
        }
        _ => return None,
    };

    let resolved = value::spacing(theme, token.value.as_deref()?);
    let mut output = RuleOutput::new();
    for side in sides {
        output.push(side, resolved.clone());
    }
    Some(output)
}

fn space_x(token: &ParsedClass, theme: &Theme) -> Option<RuleOutput> {
    let gap = value::spacing(theme, token.value.as_deref()?);
    let mut output = RuleOutput::single("--zp-space-x-reverse", "0");
    output.push("margin-right", format!("calc({gap} * var(--zp-space-x-reverse))"));
    output.push(
        "margin-left",
        format!("calc({gap} * calc(1 - var(--zp-space-x-reverse)))"),
    );
    Some(output.with_child(BETWEEN_CHILDREN))
}

fn space_y(token: &ParsedClass, theme: &Theme) -> Option<RuleOutput> {
    let gap = value::spacing(theme, token.value.as_deref()?);
    let mut output = RuleOutput::single("--zp-space-y-reverse", "0");
    output.push(
        "margin-top",
        format!("calc({gap} * calc(1 - var(--zp-space-y-reverse)))"),
    );
    output.push("margin-bottom", format!("calc({gap} * var(--zp-space-y-reverse))"));
    Some(output.with_child(BETWEEN_CHILDREN))
}

#[cfg(test)]
mod tests {
    use super::*;
    use zephyr_parse::parse_class;

    fn resolve_class(class: &str) -> Option<RuleOutput> {
        resolve(&parse_class(class), &Theme::standard())
    }

    #[test]
    fn padding_sides() {
        let p = resolve_class("p-4").unwrap();
        assert_eq!(p.properties, vec![("padding".into(), "1rem".into())]);

        let px = resolve_class("px-2").unwrap();
        assert_eq!(
            px.properties,
            vec![
                ("padding-left".into(), "0.5rem".into()),
                ("padding-right".into(), "0.5rem".into()),
            ]
        );
    }

    #[test]
    fn margins_accept_negatives_and_literals() {
        let themed = resolve_class("-m-4").unwrap();
        assert_eq!(themed.properties, vec![("margin".into(), "-1rem".into())]);

        let literal = resolve_class("-m-13px").unwrap();
        assert_eq!(literal.properties, vec![("margin".into(), "-13px".into())]);

        let auto = resolve_class("mx-auto").unwrap();
        assert_eq!(
            auto.properties,
            vec![
                ("margin-left".into(), "auto".into()),
                ("margin-right".into(), "auto".into()),
            ]
        );
    }

    #[test]
    fn space_between_targets_children() {
        let space = resolve_class("space-x-4").unwrap();
        assert_eq!(space.child_selector.as_deref(), Some(BETWEEN_CHILDREN));
        assert_eq!(
            space.properties[1],
            (
                "margin-right".into(),
                "calc(1rem * var(--zp-space-x-reverse))".into()
            )
        );

        let reverse = resolve_class("space-y-reverse").unwrap();
        assert_eq!(
            reverse.properties,
            vec![("--zp-space-y-reverse".into(), "1".into())]
        );
    }
}
