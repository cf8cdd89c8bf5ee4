//! Built-in theme data.
//!
//! These tables are the raw material the default [`crate::Theme`] is built
//! from. They are kept as plain static slices so the construction code in
//! `theme.rs` stays free of literals.

/// Shaded color families, fifty through nine hundred.
pub(crate) static COLOR_FAMILIES: &[(&str, &[(&str, &str)])] = &[
    (
        "gray",
        &[
            ("50", "#f9fafb"),
            ("100", "#f3f4f6"),
            ("200", "#e5e7eb"),
            ("300", "#d1d5db"),
            ("400", "#9ca3af"),
            ("500", "#6b7280"),
            ("600", "#4b5563"),
            ("700", "#374151"),
            ("800", "#1f2937"),
            ("900", "#111827"),
        ],
    ),
    (
        "red",
        &[
            ("50", "#fef2f2"),
            ("100", "#fee2e2"),
            ("200", "#fecaca"),
            ("300", "#fca5a5"),
            ("400", "#f87171"),
            ("500", "#ef4444"),
            ("600", "#dc2626"),
            ("700", "#b91c1c"),
            ("800", "#991b1b"),
            ("900", "#7f1d1d"),
        ],
    ),
    (
        "orange",
        &[
            ("50", "#fff7ed"),
            ("100", "#ffedd5"),
            ("200", "#fed7aa"),
            ("300", "#fdba74"),
            ("400", "#fb923c"),
            ("500", "#f97316"),
            ("600", "#ea580c"),
            ("700", "#c2410c"),
            ("800", "#9a3412"),
            ("900", "#7c2d12"),
        ],
    ),
    (
        "amber",
        &[
            ("50", "#fffbeb"),
            ("100", "#fef3c7"),
            ("200", "#fde68a"),
            ("300", "#fcd34d"),
            ("400", "#fbbf24"),
            ("500", "#f59e0b"),
            ("600", "#d97706"),
            ("700", "#b45309"),
            ("800", "#92400e"),
            ("900", "#78350f"),
        ],
    ),
    (
        "yellow",
        &[
            ("50", "#fefce8"),
            ("100", "#fef9c3"),
            ("200", "#fef08a"),
            ("300", "#fde047"),
            ("400", "#facc15"),
            ("500", "#eab308"),
            ("600", "#ca8a04"),
            ("700", "#a16207"),
            ("800", "#854d0e"),
            ("900", "#713f12"),
        ],
    ),
    (
        "green",
        &[
            ("50", "#f0fdf4"),
            ("100", "#dcfce7"),
            ("200", "#bbf7d0"),
            ("300", "#86efac"),
            ("400", "#4ade80"),
            ("500", "#22c55e"),
            ("600", "#16a34a"),
            ("700", "#15803d"),
            ("800", "#166534"),
            ("900", "#14532d"),
        ],
    ),
    (
        "emerald",
        &[
            ("50", "#ecfdf5"),
            ("100", "#d1fae5"),
            ("200", "#a7f3d0"),
            ("300", "#6ee7b7"),
            ("400", "#34d399"),
            ("500", "#10b981"),
            ("600", "#059669"),
            ("700", "#047857"),
            ("800", "#065f46"),
            ("900", "#064e3b"),
        ],
    ),
    (
        "teal",
        &[
            ("50", "#f0fdfa"),
            ("100", "#ccfbf1"),
            ("200", "#99f6e4"),
            ("300", "#5eead4"),
            ("400", "#2dd4bf"),
            ("500", "#14b8a6"),
            ("600", "#0d9488"),
            ("700", "#0f766e"),
            ("800", "#115e59"),
            ("900", "#134e4a"),
        ],
    ),
    (
        "cyan",
        &[
            ("50", "#ecfeff"),
            ("100", "#cffafe"),
            ("200", "#a5f3fc"),
            ("300", "#67e8f9"),
            ("400", "#22d3ee"),
            ("500", "#06b6d4"),
            ("600", "#0891b2"),
            ("700", "#0e7490"),
            ("800", "#155e75"),
            ("900", "#164e63"),
        ],
    ),
    (
        "sky",
        &[
            ("50", "#f0f9ff"),
            ("100", "#e0f2fe"),
            ("200", "#bae6fd"),
            ("300", "#7dd3fc"),
            ("400", "#38bdf8"),
            ("500", "#0ea5e9"),
            ("600", "#0284c7"),
            ("700", "#0369a1"),
            ("800", "#075985"),
            ("900", "#0c4a6e"),
        ],
    ),
    (
        "blue",
        &[
            ("50", "#eff6ff"),
            ("100", "#dbeafe"),
            ("200", "#bfdbfe"),
            ("300", "#93c5fd"),
            ("400", "#60a5fa"),
            ("500", "#3b82f6"),
            ("600", "#2563eb"),
            ("700", "#1d4ed8"),
            ("800", "#1e40af"),
            ("900", "#1e3a8a"),
        ],
    ),
    (
        "indigo",
        &[
            ("50", "#eef2ff"),
            ("100", "#e0e7ff"),
            ("200", "#c7d2fe"),
            ("300", "#a5b4fc"),
            ("400", "#818cf8"),
            ("500", "#6366f1"),
            ("600", "#4f46e5"),
            ("700", "#4338ca"),
            ("800", "#3730a3"),
            ("900", "#312e81"),
        ],
    ),
    (
        "violet",
        &[
            ("50", "#f5f3ff"),
            ("100", "#ede9fe"),
            ("200", "#ddd6fe"),
            ("300", "#c4b5fd"),
            ("400", "#a78bfa"),
            ("500", "#8b5cf6"),
            ("600", "#7c3aed"),
            ("700", "#6d28d9"),
            ("800", "#5b21b6"),
            ("900", "#4c1d95"),
        ],
    ),
    (
        "purple",
        &[
            ("50", "#faf5ff"),
            ("100", "#f3e8ff"),
            ("200", "#e9d5ff"),
            ("300", "#d8b4fe"),
            ("400", "#c084fc"),
            ("500", "#a855f7"),
            ("600", "#9333ea"),
            ("700", "#7e22ce"),
            ("800", "#6b21a8"),
            ("900", "#581c87"),
        ],
    ),
    (
        "fuchsia",
        &[
            ("50", "#fdf4ff"),
            ("100", "#fae8ff"),
            ("200", "#f5d0fe"),
            ("300", "#f0abfc"),
            ("400", "#e879f9"),
            ("500", "#d946ef"),
            ("600", "#c026d3"),
            ("700", "#a21caf"),
            ("800", "#86198f"),
            ("900", "#701a75"),
        ],
    ),
    (
        "pink",
        &[
            ("50", "#fdf2f8"),
            ("100", "#fce7f3"),
            ("200", "#fbcfe8"),
            ("300", "#f9a8d4"),
            ("400", "#f472b6"),
            ("500", "#ec4899"),
            ("600", "#db2777"),
            ("700", "#be185d"),
            ("800", "#9d174d"),
            ("900", "#831843"),
        ],
    ),
    (
        "rose",
        &[
            ("50", "#fff1f2"),
            ("100", "#ffe4e6"),
            ("200", "#fecdd3"),
            ("300", "#fda4af"),
            ("400", "#fb7185"),
            ("500", "#f43f5e"),
            ("600", "#e11d48"),
            ("700", "#be123c"),
            ("800", "#9f1239"),
            ("900", "#881337"),
        ],
    ),
];

/// Colors that have a single value rather than shades.
pub(crate) static SINGLE_COLORS: &[(&str, &str)] = &[
    ("inherit", "inherit"),
    ("current", "currentColor"),
    ("transparent", "transparent"),
    ("black", "#000000"),
    ("white", "#ffffff"),
];

/// The spacing scale shared by padding, margin, sizing, and positioning.
pub(crate) static SPACING: &[(&str, &str)] = &[
    ("0", "0px"),
    ("px", "1px"),
    ("0.5", "0.125rem"),
    ("1", "0.25rem"),
    ("1.5", "0.375rem"),
    ("2", "0.5rem"),
    ("2.5", "0.625rem"),
    ("3", "0.75rem"),
    ("3.5", "0.875rem"),
    ("4", "1rem"),
    ("5", "1.25rem"),
    ("6", "1.5rem"),
    ("7", "1.75rem"),
    ("8", "2rem"),
    ("9", "2.25rem"),
    ("10", "2.5rem"),
    ("11", "2.75rem"),
    ("12", "3rem"),
    ("14", "3.5rem"),
    ("16", "4rem"),
    ("20", "5rem"),
    ("24", "6rem"),
    ("28", "7rem"),
    ("32", "8rem"),
    ("36", "9rem"),
    ("40", "10rem"),
    ("44", "11rem"),
    ("48", "12rem"),
    ("52", "13rem"),
    ("56", "14rem"),
    ("60", "15rem"),
    ("64", "16rem"),
    ("72", "18rem"),
    ("80", "20rem"),
    ("96", "24rem"),
];

/// Font size keys mapped to a size and its paired line height.
pub(crate) static FONT_SIZES: &[(&str, &str, &str)] = &[
    ("xs", "0.75rem", "1rem"),
    ("sm", "0.875rem", "1.25rem"),
    ("base", "1rem", "1.5rem"),
    ("lg", "1.125rem", "1.75rem"),
    ("xl", "1.25rem", "1.75rem"),
    ("2xl", "1.5rem", "2rem"),
    ("3xl", "1.875rem", "2.25rem"),
    ("4xl", "2.25rem", "2.5rem"),
    ("5xl", "3rem", "1"),
    ("6xl", "3.75rem", "1"),
    ("7xl", "4.5rem", "1"),
    ("8xl", "6rem", "1"),
    ("9xl", "8rem", "1"),
];

/// Font family stacks.
pub(crate) static FONT_FAMILIES: &[(&str, &[&str])] = &[
    (
        "sans",
        &[
            "ui-sans-serif",
            "system-ui",
            "-apple-system",
            "BlinkMacSystemFont",
            "\"Segoe UI\"",
            "Roboto",
            "\"Helvetica Neue\"",
            "Arial",
            "\"Noto Sans\"",
            "sans-serif",
        ],
    ),
    (
        "serif",
        &[
            "ui-serif",
            "Georgia",
            "Cambria",
            "\"Times New Roman\"",
            "Times",
            "serif",
        ],
    ),
    (
        "mono",
        &[
            "ui-monospace",
            "SFMono-Regular",
            "Menlo",
            "Monaco",
            "Consolas",
            "\"Liberation Mono\"",
            "\"Courier New\"",
            "monospace",
        ],
    ),
];

/// Responsive breakpoints, narrowest first.
pub(crate) static SCREENS: &[(&str, &str)] = &[
    ("sm", "640px"),
    ("md", "768px"),
    ("lg", "1024px"),
    ("xl", "1280px"),
    ("2xl", "1536px"),
];

/// Border radius scale. `DEFAULT` is the key used by the bare `rounded`
/// utility.
pub(crate) static BORDER_RADIUS: &[(&str, &str)] = &[
    ("none", "0px"),
    ("sm", "0.125rem"),
    ("DEFAULT", "0.25rem"),
    ("md", "0.375rem"),
    ("lg", "0.5rem"),
    ("xl", "0.75rem"),
    ("2xl", "1rem"),
    ("3xl", "1.5rem"),
    ("full", "9999px"),
];

/// Box shadow scale. `DEFAULT` is the key used by the bare `shadow`
/// utility.
pub(crate) static BOX_SHADOWS: &[(&str, &str)] = &[
    ("sm", "0 1px 2px 0 rgb(0 0 0 / 0.05)"),
    (
        "DEFAULT",
        "0 1px 3px 0 rgb(0 0 0 / 0.1), 0 1px 2px -1px rgb(0 0 0 / 0.1)",
    ),
    (
        "md",
        "0 4px 6px -1px rgb(0 0 0 / 0.1), 0 2px 4px -2px rgb(0 0 0 / 0.1)",
    ),
    (
        "lg",
        "0 10px 15px -3px rgb(0 0 0 / 0.1), 0 4px 6px -4px rgb(0 0 0 / 0.1)",
    ),
    (
        "xl",
        "0 20px 25px -5px rgb(0 0 0 / 0.1), 0 8px 10px -6px rgb(0 0 0 / 0.1)",
    ),
    ("2xl", "0 25px 50px -12px rgb(0 0 0 / 0.25)"),
    ("inner", "inset 0 2px 4px 0 rgb(0 0 0 / 0.05)"),
    ("none", "none"),
];
