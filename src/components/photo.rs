//! Photo upload preview.
//!
//! Reading the file is the one asynchronous step on these pages: the
//! `FileReader` completion callback sets the preview image once the data URL
//! is ready.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Event, FileReader, HtmlImageElement, HtmlInputElement};

use crate::dom::{self, Listener};
use crate::error::UiError;

/// Bind `change` on the file input so the chosen photo shows in the preview image.
///
/// Returns `None` when either element is missing from the page.
pub fn preview_photo(input_id: &str, preview_id: &str) -> Result<Option<Listener>, UiError> {
    let document = dom::document()?;
    let (Ok(input), Ok(preview)) = (
        dom::by_id::<HtmlInputElement>(&document, input_id),
        dom::by_id::<HtmlImageElement>(&document, preview_id),
    ) else {
        log::debug!("photo preview skipped: #{input_id} or #{preview_id} missing");
        return Ok(None);
    };

    let field = input.clone();
    let listener = Listener::new(&input, "change", move |_| {
        dom::report("photo preview", read_into(&field, &preview));
    })?;
    Ok(Some(listener))
}

fn read_into(input: &HtmlInputElement, preview: &HtmlImageElement) -> Result<(), UiError> {
    let Some(file) = input.files().and_then(|files| files.get(0)) else {
        return Ok(());
    };
    let reader = FileReader::new()?;

    // The closure frees itself after the first load.
    let holder: Rc<RefCell<Option<Closure<dyn FnMut(Event)>>>> = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);
    let reader_for_cb = reader.clone();
    let preview = preview.clone();
    let on_load = Closure::<dyn FnMut(Event)>::new(move |_: Event| {
        dom::report("photo loaded", show_preview(&reader_for_cb, &preview));
        reader_for_cb.set_onload(None);
        holder_for_cb.borrow_mut().take();
    });
    reader.set_onload(Some(on_load.as_ref().unchecked_ref()));
    *holder.borrow_mut() = Some(on_load);

    reader.read_as_data_url(&file)?;
    Ok(())
}

fn show_preview(reader: &FileReader, preview: &HtmlImageElement) -> Result<(), UiError> {
    let data_url = reader.result()?.as_string().ok_or(UiError::Cast("data URL string"))?;
    preview.set_src(&data_url);
    dom::set_style(preview, "display", "block")
}
