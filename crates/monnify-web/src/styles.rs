//! Presentation Injection
//!
//! The overlay, frame and preloader styling the hosted checkout app
//! assumes. Injected into `<head>` once per page load; the element id
//! is part of the contract and checked before inserting so repeated
//! `initialize` calls stay idempotent.

use monnify_core::SdkError;
use web_sys::Document;

use crate::dom::js_error;

/// Fixed id of the injected style block
pub const STYLE_ID: &str = "MonnifyStyles";

const CHECKOUT_CSS: &str = r#"
.monnify-wrapper {
  position: fixed;
  top: 0;
  left: 0;
  width: 100%;
  height: 100%;
  z-index: 999999999;
}
#MonnifyFrame,
#MonnifyPreLoader,
.monnify-frame {
  position: fixed;
  top: 0;
  left: 0;
  width: 100%;
  height: 100%;
  z-index: 2147483647;
  margin: 0;
  padding: 0;
  border: none;
  outline: 0;
}
.hide {
  display: none;
  visibility: hidden;
}
.show {
  display: block;
  visibility: visible;
}
#MonnifyPreLoader,
.monnify-frame {
  background: rgba(52, 52, 52);
  text-align: center;
  transition-property: visibility, display;
  transition-duration: 0.6s;
  transition-timing-function: ease-in-out;
}
#MonnifyPreLoader .lds-spinner,
.monnify-frame .lds-spinner {
  top: 50%;
  margin-top: -40px;
}
.lds-spinner {
  color: #fff;
  display: inline-block;
  position: relative;
  width: 64px;
  height: 64px;
}
.lds-spinner div {
  transform-origin: 32px 32px;
  animation: lds-spinner 1.2s linear infinite;
}
.lds-spinner div:after {
  content: " ";
  display: block;
  position: absolute;
  top: 3px;
  left: 29px;
  width: 5px;
  height: 14px;
  border-radius: 20%;
  background: #fff;
}
.lds-spinner div:nth-child(1) {
  transform: rotate(0);
  animation-delay: -1.1s;
}
.lds-spinner div:nth-child(2) {
  transform: rotate(30deg);
  animation-delay: -1s;
}
.lds-spinner div:nth-child(3) {
  transform: rotate(60deg);
  animation-delay: -0.9s;
}
.lds-spinner div:nth-child(4) {
  transform: rotate(90deg);
  animation-delay: -0.8s;
}
.lds-spinner div:nth-child(5) {
  transform: rotate(120deg);
  animation-delay: -0.7s;
}
.lds-spinner div:nth-child(6) {
  transform: rotate(150deg);
  animation-delay: -0.6s;
}
.lds-spinner div:nth-child(7) {
  transform: rotate(180deg);
  animation-delay: -0.5s;
}
.lds-spinner div:nth-child(8) {
  transform: rotate(210deg);
  animation-delay: -0.4s;
}
.lds-spinner div:nth-child(9) {
  transform: rotate(240deg);
  animation-delay: -0.3s;
}
.lds-spinner div:nth-child(10) {
  transform: rotate(270deg);
  animation-delay: -0.2s;
}
.lds-spinner div:nth-child(11) {
  transform: rotate(300deg);
  animation-delay: -0.1s;
}
.lds-spinner div:nth-child(12) {
  transform: rotate(330deg);
  animation-delay: 0s;
}
@keyframes lds-spinner {
  0% {
    opacity: 1;
  }
  100% {
    opacity: 0;
  }
}
body {
  margin: 0;
  padding: 0;
}
"#;

/// Insert the style block into the document head, once
pub fn ensure_styles_injected(document: &Document) -> Result<(), SdkError> {
    if document.get_element_by_id(STYLE_ID).is_some() {
        return Ok(());
    }

    let style = document
        .create_element("style")
        .map_err(|error| js_error("create style element", &error))?;
    style.set_id(STYLE_ID);
    style
        .set_attribute("type", "text/css")
        .map_err(|error| js_error("set style type", &error))?;
    style.set_text_content(Some(CHECKOUT_CSS));

    let head = document
        .head()
        .ok_or_else(|| SdkError::Dom("document has no head".into()))?;
    head.append_child(&style)
        .map_err(|error| js_error("attach style element", &error))?;

    Ok(())
}
