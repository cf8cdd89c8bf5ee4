//! Static lookup tables for the class-name lexer.
//!
//! These are plain data. The lexer consults them at fixed points in its
//! priority order; they are public so downstream code can agree with the
//! lexer on what counts as a whole name or a compound key.

use phf::{phf_set, Set};

/// Dashed names that are complete utilities on their own and must never be
/// split into a utility/value pair.
pub static WHOLE_CLASSES: Set<&'static str> = phf_set! {
    "inline-block",
    "inline-flex",
    "inline-grid",
    "inline-table",
    "table-caption",
    "table-cell",
    "table-column",
    "table-column-group",
    "table-footer-group",
    "table-header-group",
    "table-row",
    "table-row-group",
    "flow-root",
    "list-item",
    "flex-row",
    "flex-row-reverse",
    "flex-col",
    "flex-col-reverse",
    "flex-wrap",
    "flex-wrap-reverse",
    "flex-nowrap",
    "flex-grow",
    "flex-shrink",
    "box-border",
    "box-content",
    "isolation-auto",
    "not-italic",
    "line-through",
    "no-underline",
    "normal-case",
    "subpixel-antialiased",
    "sr-only",
    "not-sr-only",
    "drop-shadow",
    "divide-x",
    "divide-y",
    "divide-x-reverse",
    "divide-y-reverse",
    "space-x-reverse",
    "space-y-reverse",
};

/// Multi-word utility keys. When a class starts with one of these followed
/// by a dash, the split happens at the end of the prefix instead of at the
/// last dash, so `max-w-screen-sm` keeps `screen-sm` intact as its value.
pub static COMPOUND_PREFIXES: Set<&'static str> = phf_set! {
    "grid-cols",
    "grid-rows",
    "grid-flow",
    "col-span",
    "col-start",
    "col-end",
    "row-span",
    "row-start",
    "row-end",
    "auto-cols",
    "auto-rows",
    "gap-x",
    "gap-y",
    "translate-x",
    "translate-y",
    "scale-x",
    "scale-y",
    "skew-x",
    "skew-y",
    "space-x",
    "space-y",
    "divide-x",
    "divide-y",
    "min-w",
    "min-h",
    "max-w",
    "max-h",
    "inset-x",
    "inset-y",
    "flex-grow",
    "flex-shrink",
    "justify-items",
    "justify-self",
    "place-content",
    "place-items",
    "place-self",
    "rounded-t",
    "rounded-r",
    "rounded-b",
    "rounded-l",
    "rounded-tl",
    "rounded-tr",
    "rounded-br",
    "rounded-bl",
    "border-t",
    "border-r",
    "border-b",
    "border-l",
    "ring-offset",
    "outline-offset",
    "mix-blend",
    "drop-shadow",
    "will-change",
    "pointer-events",
    "break-before",
    "break-inside",
    "break-after",
    "scroll-m",
    "scroll-mx",
    "scroll-my",
    "scroll-mt",
    "scroll-mr",
    "scroll-mb",
    "scroll-ml",
    "scroll-p",
    "scroll-px",
    "scroll-py",
    "scroll-pt",
    "scroll-pr",
    "scroll-pb",
    "scroll-pl",
};

/// Utilities that accept the `color-shade/NN` opacity-modifier form.
/// The `/NN` suffix on these is an alpha percentage, never a fraction.
pub static COLOR_UTILITIES: &[&str] = &[
    "bg",
    "text",
    "border",
    "ring",
    "placeholder",
    "divide",
];
