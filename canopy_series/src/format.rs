// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tooltip text helpers.

use alloc::string::String;
use core::fmt::Write;

/// Escapes text for inclusion in HTML tooltips.
///
/// ```rust
/// use canopy_series::encode_html;
///
/// assert_eq!(encode_html("a<b> & \"c\" 'd'"), "a&lt;b&gt; &amp; &quot;c&quot; &#39;d&#39;");
/// ```
#[must_use]
pub fn encode_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Appends `" : value"` when `value` is a number other than `NaN`.
pub(crate) fn push_value(text: &mut String, value: Option<f64>) {
    if let Some(value) = value.filter(|v| !v.is_nan()) {
        // Writing into a `String` cannot fail.
        let _ = write!(text, " : {value}");
    }
}
