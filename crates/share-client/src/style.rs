//! Stylesheets for the trigger and the fallback menu.

use std::cell::Cell;

/// Marker attribute on the page-level fallback `<style>`.
const FALLBACK_STYLE_MARKER: &str = "data-bux-fallback-style";

thread_local! {
    static FALLBACK_STYLE_INJECTED: Cell<bool> = const { Cell::new(false) };
}

/// Trigger styles, rendered inside the host's render root.
pub const TRIGGER_CSS: &str = r"
:host,
:root {
  --bux-share-btn-bg: #eaeaea;
  --bux-share-btn-color: #121212;
  --bux-share-btn-font-size: 2rem;
  --bux-share-btn-height: 4.2rem;
  --bux-share-btn-padding-inline: 1.5rem;
  --bux-share-btn-border-radius: 0.5rem;
  --bux-share-btn-gap: 0.5rem;
  --bux-share-btn-hover-bg: #121212;
  --bux-share-btn-hover-color: #eaeaea;
}
#bux-share-btn {
  align-items: center;
  appearance: none;
  font-family: inherit;
  background: var(--bux-share-btn-bg);
  border: none;
  border-radius: var(--bux-share-btn-border-radius);
  color: var(--bux-share-btn-color);
  cursor: pointer;
  display: inline-flex;
  font-size: var(--bux-share-btn-font-size);
  font-weight: bold;
  gap: var(--bux-share-btn-gap);
  height: var(--bux-share-btn-height);
  justify-content: center;
  line-height: 1;
  padding-inline: var(--bux-share-btn-padding-inline);
  user-select: none;
  vertical-align: middle;
}
#bux-share-btn:hover {
  background: var(--bux-share-btn-hover-bg);
  color: var(--bux-share-btn-hover-color);
}
#bux-share-btn:disabled {
  cursor: progress;
  opacity: 0.6;
}
::slotted(*) {
  line-height: 1;
  vertical-align: middle;
}
::slotted(svg),
::slotted(img),
::slotted(span) {
  display: block;
}
";

/// Fallback menu styles. The overlay lives in `document.body`, so these go
/// into `document.head` once per page.
pub const FALLBACK_CSS: &str = r"
:root {
  --bux-share-fallback-bg: #251f17;
  --bux-share-fallback-color: #ede0d4;
  --bux-share-fallback-border-radius: 2rem;
  --bux-share-fallback-title-font-size: 2.2rem;
  --bux-share-fallback-copy-box-bg: #302921;
}
.bux-share-fallback-menu {
  text-align: left;
  background: transparent;
}
.bux-share-fallback {
  position: fixed;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  opacity: 0;
  pointer-events: none;
  transition: opacity 0.2s ease-in-out;
  z-index: 9999;
  background: rgba(0, 0, 0, 0.3);
}
.bux-share-fallback.visible {
  opacity: 1;
  pointer-events: auto;
}
.bux-share-fallback-inner {
  background: var(--bux-share-fallback-bg);
  border-radius: var(--bux-share-fallback-border-radius);
  color: var(--bux-share-fallback-color);
  max-width: 320px;
  width: auto;
  padding: 20px;
  box-sizing: border-box;
  transition: transform 0.2s ease-out, opacity 0.2s ease-out;
}
@media (max-width: 768px) {
  .bux-share-fallback-menu {
    width: 100%;
  }
  .bux-share-fallback {
    align-items: end;
  }
  .bux-share-fallback-inner {
    width: 100%;
    max-width: 100%;
    border-radius: var(--bux-share-fallback-border-radius) var(--bux-share-fallback-border-radius) 0 0;
    transform: translateY(100%);
  }
  .bux-share-fallback.visible .bux-share-fallback-inner {
    transform: translateY(0);
  }
}
.bux-share-fallback-title {
  color: inherit;
  font-size: var(--bux-share-fallback-title-font-size);
  font-weight: normal;
  margin: 0;
}
.bux-share-fallback-menu a,
.bux-share-fallback-menu button {
  appearance: none;
  background: none;
  border: none;
  color: inherit;
  cursor: pointer;
  font-family: inherit;
  text-align: left;
  text-decoration: none;
}
.bux-copy-box {
  background: var(--bux-share-fallback-copy-box-bg);
  padding: 10px;
  border-radius: var(--bux-share-fallback-border-radius);
  margin: 20px 0;
}
.bux-copy-link {
  width: 100%;
}
.bux-copy-wrapper {
  align-items: center;
  display: flex;
  gap: 10px;
  overflow: hidden;
  width: 100%;
}
.bux-copy-logo {
  flex: 0 0 auto;
  width: 48px;
}
.bux-copy-text {
  flex: 1 1 auto;
  overflow: hidden;
  min-width: 0;
}
.bux-copy-text strong {
  display: block;
  overflow: hidden;
  text-overflow: ellipsis;
  white-space: nowrap;
}
.bux-copy-icon {
  flex: 0 0 auto;
  font-size: 2.5rem;
}
.bux-share-fallback-menu ul {
  align-items: center;
  display: flex;
  flex-wrap: wrap;
  list-style: none;
  padding: 0;
}
.bux-share-fallback-menu ul li {
  font-size: 14px;
  margin: 5px 0;
  min-width: 70px;
  text-align: center;
  width: 70px;
}
.bux-share-fallback-menu ul a img {
  border-radius: 50%;
  width: 50px;
}
.bux-share-fallback-menu ul a span {
  display: block;
  text-align: center;
}
";

/// Insert [`FALLBACK_CSS`] into `document.head` unless this page already has
/// it. Returns whether a stylesheet was inserted.
pub fn ensure_fallback_style() -> bool {
    if FALLBACK_STYLE_INJECTED.with(Cell::get) {
        return false;
    }

    let document = gloo::utils::document();
    let selector = format!("[{FALLBACK_STYLE_MARKER}]");
    if let Ok(Some(_)) = document.query_selector(&selector) {
        // Inserted by another bundle on the same page.
        FALLBACK_STYLE_INJECTED.with(|flag| flag.set(true));
        return false;
    }

    let Ok(style) = document.create_element("style") else {
        tracing::warn!("could not create fallback <style>");
        return false;
    };
    style.set_text_content(Some(FALLBACK_CSS));
    let _ = style.set_attribute(FALLBACK_STYLE_MARKER, "true");
    if let Err(e) = gloo::utils::head().append_child(&style) {
        tracing::warn!(error = ?e, "could not insert fallback <style>");
        return false;
    }

    FALLBACK_STYLE_INJECTED.with(|flag| flag.set(true));
    true
}
