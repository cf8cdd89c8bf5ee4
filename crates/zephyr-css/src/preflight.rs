//! Preflight styles emitted ahead of generated rules.
//!
//! A preflight is a block of raw CSS that a [`crate::Generator`] prepends to
//! its output when serialization is asked to include it. The built-in base
//! preflight carries a small reset plus the keyframes that the `animate-*`
//! utilities reference.

/// A source of raw CSS prepended to generated output.
pub trait Preflight: Send + Sync {
    /// Returns the raw CSS for this preflight.
    fn get_css(&self) -> String;
}

/// A preflight backed by a fixed string.
#[derive(Debug, Clone)]
pub struct StaticPreflight {
    css: String,
}

impl StaticPreflight {
    pub fn new(css: impl Into<String>) -> Self {
        Self { css: css.into() }
    }

    /// The built-in reset and keyframe block.
    pub fn base() -> Self {
        Self::new(BASE_PREFLIGHT)
    }
}

impl Preflight for StaticPreflight {
    fn get_css(&self) -> String {
        self.css.clone()
    }
}

/// Element reset plus the keyframes used by the animation utilities.
pub(crate) const BASE_PREFLIGHT: &str = "\
*, ::before, ::after {
  box-sizing: border-box;
  border-width: 0;
  border-style: solid;
  border-color: currentColor;
}
html {
  line-height: 1.5;
  -webkit-text-size-adjust: 100%;
  tab-size: 4;
}
body {
  margin: 0;
  line-height: inherit;
}
h1, h2, h3, h4, h5, h6 {
  font-size: inherit;
  font-weight: inherit;
}
a {
  color: inherit;
  text-decoration: inherit;
}
b, strong {
  font-weight: bolder;
}
code, kbd, samp, pre {
  font-family: ui-monospace, SFMono-Regular, Menlo, Monaco, Consolas, \"Liberation Mono\", \"Courier New\", monospace;
  font-size: 1em;
}
button, input, optgroup, select, textarea {
  font-family: inherit;
  font-size: 100%;
  line-height: inherit;
  color: inherit;
  margin: 0;
  padding: 0;
}
img, svg, video, canvas, audio, iframe, embed, object {
  display: block;
  vertical-align: middle;
}
img, video {
  max-width: 100%;
  height: auto;
}
@keyframes spin {
  to {
    transform: rotate(360deg);
  }
}
@keyframes ping {
  75%, 100% {
    transform: scale(2);
    opacity: 0;
  }
}
@keyframes pulse {
  50% {
    opacity: .5;
  }
}
@keyframes bounce {
  0%, 100% {
    transform: translateY(-25%);
    animation-timing-function: cubic-bezier(0.8, 0, 1, 1);
  }
  50% {
    transform: none;
    animation-timing-function: cubic-bezier(0, 0, 0.2, 1);
  }
}";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_preflight_returns_its_css() {
        let preflight = StaticPreflight::new("a { color: red; }");
        assert_eq!(preflight.get_css(), "a { color: red; }");
    }

    #[test]
    fn base_preflight_defines_animation_keyframes() {
        let css = StaticPreflight::base().get_css();
        for name in ["spin", "ping", "pulse", "bounce"] {
            assert!(css.contains(&format!("@keyframes {name}")));
        }
    }
}
