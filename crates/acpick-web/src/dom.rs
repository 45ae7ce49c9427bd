//! DOM construction and event wiring for the picker widget.
//!
//! Everything here runs once, synchronously, at mount time. The picker
//! state lives in [`AccentPicker`]; every style or attribute write below
//! is a projection of that state through [`DomSink`].

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::Closure;
use web_sys::{CssStyleDeclaration, Document, Element, HtmlElement, HtmlInputElement, Window};

use acpick_core::{AccentPicker, AccentSink, AccentUpdate, HexColor};

use crate::config::PickerConfig;
use crate::markup;
use crate::style;

/// [`AccentSink`] writing into the live page.
struct DomSink {
    primary_property: String,
    derived_property: String,
    root_style: CssStyleDeclaration,
    toggle: HtmlElement,
    backdrop: Element,
    panel: Element,
    wheel: HtmlInputElement,
    hex_val: Element,
    swatches: Vec<Element>,
}

impl AccentSink for DomSink {
    fn apply_update(&mut self, update: &AccentUpdate) {
        let accent = update.accent.to_string();
        let dark = update.accent_dark.to_string();

        set_property(&self.root_style, &self.primary_property, &accent);
        set_property(&self.root_style, &self.derived_property, &dark);
        set_property(&self.toggle.style(), "background", &accent);
        self.wheel.set_value(&accent);
        self.hex_val.set_text_content(Some(&accent));
        for (index, swatch) in self.swatches.iter().enumerate() {
            set_class(swatch, style::ACTIVE_CLASS, update.active_preset == Some(index));
        }
    }

    fn set_panel_open(&mut self, open: bool) {
        set_class(&self.panel, style::OPEN_CLASS, open);
        set_class(&self.backdrop, style::OPEN_CLASS, open);
        // The hidden toggle leaves the interaction path entirely, so it
        // cannot re-open an already-open panel.
        let toggle_style = self.toggle.style();
        set_property(&toggle_style, "opacity", if open { "0" } else { "1" });
        set_property(
            &toggle_style,
            "pointer-events",
            if open { "none" } else { "auto" },
        );
    }
}

fn set_property(style: &CssStyleDeclaration, name: &str, value: &str) {
    if let Err(err) = style.set_property(name, value) {
        log::error!("failed to set {name}: {err:?}");
    }
}

fn set_class(element: &Element, class: &str, on: bool) {
    if let Err(err) = element.class_list().toggle_with_force(class, on) {
        log::error!("failed to toggle {class}: {err:?}");
    }
}

/// Mount the picker into the current document: read the initial accent,
/// inject the stylesheet, build the toggle/backdrop/panel nodes, wire
/// events and paint the initial state.
pub fn mount(config: PickerConfig) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let raw = read_accent_property(&window, &document, &config.primary_property);
    let picker = AccentPicker::from_css_value_with_presets(raw.as_deref(), config.presets);
    log::debug!("initial accent {}", picker.active());

    inject_stylesheet(&document, &config)?;

    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no <body>"))?;

    let toggle: HtmlElement = document.create_element("button")?.dyn_into()?;
    toggle.set_class_name(style::TOGGLE_CLASS);
    toggle.set_id(style::TOGGLE_ID);
    toggle.set_attribute("aria-label", "Change accent colour")?;
    toggle.set_inner_html(markup::GEAR_ICON);

    let backdrop = document.create_element("div")?;
    backdrop.set_class_name(style::BACKDROP_CLASS);
    backdrop.set_id(style::BACKDROP_ID);

    let panel = document.create_element("div")?;
    panel.set_class_name(style::PANEL_CLASS);
    panel.set_id(style::PANEL_ID);
    panel.set_inner_html(&markup::panel_markup(config.presets, picker.active()));

    body.append_child(&toggle)?;
    body.append_child(&backdrop)?;
    body.append_child(&panel)?;

    let close = query(&panel, &format!("#{}", style::CLOSE_ID))?;
    let wheel: HtmlInputElement = query(&panel, &format!("#{}", style::WHEEL_ID))?.dyn_into()?;
    let hex_val = query(&panel, &format!("#{}", style::HEX_VAL_ID))?;
    let swatches = collect_swatches(&panel)?;

    let root_style = document
        .document_element()
        .ok_or_else(|| JsValue::from_str("document has no root element"))?
        .dyn_into::<HtmlElement>()?
        .style();

    let picker = Rc::new(RefCell::new(picker));
    let sink = Rc::new(RefCell::new(DomSink {
        primary_property: config.primary_property,
        derived_property: config.derived_property,
        root_style,
        toggle: toggle.clone(),
        backdrop: backdrop.clone(),
        panel: panel.clone(),
        wheel: wheel.clone(),
        hex_val,
        swatches: swatches.clone(),
    }));

    // Open on toggle click.
    {
        let picker = Rc::clone(&picker);
        let sink = Rc::clone(&sink);
        let on_open = Closure::<dyn FnMut()>::new(move || {
            if picker.borrow_mut().open_panel() {
                sink.borrow_mut().set_panel_open(true);
            }
        });
        toggle.add_event_listener_with_callback("click", on_open.as_ref().unchecked_ref())?;
        // Listeners live for the page lifetime.
        on_open.forget();
    }

    // Close on close-button or backdrop click.
    {
        let picker = Rc::clone(&picker);
        let sink = Rc::clone(&sink);
        let on_close = Closure::<dyn FnMut()>::new(move || {
            if picker.borrow_mut().close_panel() {
                sink.borrow_mut().set_panel_open(false);
            }
        });
        close.add_event_listener_with_callback("click", on_close.as_ref().unchecked_ref())?;
        backdrop.add_event_listener_with_callback("click", on_close.as_ref().unchecked_ref())?;
        on_close.forget();
    }

    // Swatch clicks apply that preset's fixed colour.
    for (swatch, preset) in swatches.iter().zip(config.presets) {
        let picker = Rc::clone(&picker);
        let sink = Rc::clone(&sink);
        let color = preset.color;
        let on_pick = Closure::<dyn FnMut()>::new(move || {
            let update = picker.borrow_mut().apply(color);
            sink.borrow_mut().apply_update(&update);
        });
        swatch.add_event_listener_with_callback("click", on_pick.as_ref().unchecked_ref())?;
        on_pick.forget();
    }

    // Colour-input changes apply the input's current (browser-validated)
    // value.
    {
        let picker = Rc::clone(&picker);
        let sink = Rc::clone(&sink);
        let wheel = wheel.clone();
        let on_input = Closure::<dyn FnMut()>::new(move || {
            let raw = wheel.value();
            match raw.parse::<HexColor>() {
                Ok(color) => {
                    let update = picker.borrow_mut().apply(color);
                    sink.borrow_mut().apply_update(&update);
                }
                Err(err) => log::warn!("ignoring colour input value {raw:?}: {err}"),
            }
        });
        wheel.add_event_listener_with_callback("input", on_input.as_ref().unchecked_ref())?;
        on_input.forget();
    }

    // Paint the initial state so every mirror starts consistent.
    sink.borrow_mut().apply_update(&picker.borrow().update());

    Ok(())
}

/// Read the computed value of the accent property from the document root.
fn read_accent_property(window: &Window, document: &Document, property: &str) -> Option<String> {
    let root = document.document_element()?;
    let computed = window.get_computed_style(&root).ok()??;
    computed.get_property_value(property).ok()
}

fn inject_stylesheet(document: &Document, config: &PickerConfig) -> Result<(), JsValue> {
    let element = document.create_element("style")?;
    element.set_text_content(Some(&crate::style::stylesheet(&config.primary_property)));
    document
        .head()
        .ok_or_else(|| JsValue::from_str("document has no <head>"))?
        .append_child(&element)?;
    Ok(())
}

fn query(parent: &Element, selector: &str) -> Result<Element, JsValue> {
    parent
        .query_selector(selector)?
        .ok_or_else(|| JsValue::from_str(&format!("missing {selector}")))
}

/// Collect the swatch elements in grid order (matches preset order).
fn collect_swatches(panel: &Element) -> Result<Vec<Element>, JsValue> {
    let list = panel.query_selector_all(&format!(".{}", style::SWATCH_CLASS))?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}
