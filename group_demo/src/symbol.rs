//! Presentation of D3 element names as plain text and as MathML.

use algebra::group::D3Element;

/// MathML for the composition operator, `⋅`.
pub const DOT: &str = "<mo>&#x22C5;</mo>";
pub const EQUALS: &str = "<mo>=</mo>";

/// Renders an element name as MathML. Names that are not elements of D3 are
/// echoed back as a generic identifier.
pub fn render_mathml(name: &str) -> String {
  match name.parse::<D3Element>() {
    Ok(el) => element_mathml(el).to_owned(),
    Err(_) => format!("<mi>{}</mi>", escape(name)),
  }
}

pub const fn element_mathml(el: D3Element) -> &'static str {
  match el {
    D3Element::One => "<mi>1</mi>",
    D3Element::R => "<mi>r</mi>",
    D3Element::R2 => "<msup><mi>r</mi><mn>2</mn></msup>",
    D3Element::F => "<mi>f</mi>",
    D3Element::RF => "<mrow><mi>r</mi><mo>&#x22C5;</mo><mi>f</mi></mrow>",
    D3Element::R2F => "<mrow><msup><mi>r</mi><mn>2</mn></msup><mo>&#x22C5;</mo><mi>f</mi></mrow>",
  }
}

/// Renders an element name as plain text, e.g. `r²·f`. Unknown names are
/// returned unchanged.
pub fn render_text(name: &str) -> String {
  match name.parse::<D3Element>() {
    Ok(el) => el.symbol().to_owned(),
    Err(_) => name.to_owned(),
  }
}

/// Wraps a row of MathML in a `<math>` element.
pub fn math_row(contents: &str) -> String {
  format!("<math><mrow>{contents}</mrow></math>")
}

fn escape(raw: &str) -> String {
  let mut escaped = String::with_capacity(raw.len());
  for c in raw.chars() {
    match c {
      '<' => escaped.push_str("&lt;"),
      '>' => escaped.push_str("&gt;"),
      '&' => escaped.push_str("&amp;"),
      '"' => escaped.push_str("&quot;"),
      c => escaped.push(c),
    }
  }
  escaped
}

#[cfg(test)]
mod test {
  use std::collections::HashSet;

  use super::*;

  #[test]
  fn test_distinct() {
    let text: HashSet<_> = D3Element::ALL
      .into_iter()
      .map(|el| render_text(el.name()))
      .collect();
    let markup: HashSet<_> = D3Element::ALL
      .into_iter()
      .map(|el| render_mathml(el.name()))
      .collect();
    assert_eq!(text.len(), 6);
    assert_eq!(markup.len(), 6);
    assert!(text.iter().chain(markup.iter()).all(|s| !s.is_empty()));
  }

  #[test]
  fn test_exponent() {
    assert_eq!(render_mathml("r2"), "<msup><mi>r</mi><mn>2</mn></msup>");
    assert_eq!(render_text("r2f"), "r²·f");
  }

  #[test]
  fn test_unknown() {
    assert_eq!(render_mathml("s"), "<mi>s</mi>");
    assert_eq!(render_mathml("<b>"), "<mi>&lt;b&gt;</mi>");
    assert_eq!(render_text("s"), "s");
  }
}
