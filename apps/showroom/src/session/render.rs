use std::io::{self, Write};

use catalog::{CatalogItem, CatalogStore, FilterAndLightboxController, FilterChip, LightboxView};
use core_types::Taxonomy;

pub fn chips<C: Taxonomy, W: Write>(out: &mut W, chips: &[FilterChip<C>]) -> io::Result<()> {
    let line: Vec<String> = chips
        .iter()
        .map(|chip| {
            if chip.selected {
                format!("[*{} {}*]", chip.category, chip.count)
            } else {
                format!("[{} {}]", chip.category, chip.count)
            }
        })
        .collect();
    writeln!(out, "{}", line.join(" "))
}

fn card_line<C: Taxonomy>(item: &CatalogItem<C>) -> String {
    let mut parts = vec![item.category.label().to_string()];
    if let Some(detail) = item.material.as_ref().or(item.location.as_ref()) {
        parts.push(detail.clone());
    }
    if let Some(year) = &item.year {
        parts.push(year.clone());
    }

    let mut line = format!("  {:<4}{} | {}", item.id, item.title, parts.join(" | "));
    if item.extra_media_count() > 0 {
        line.push_str(&format!(" (+{})", item.extra_media_count()));
    }
    line
}

pub fn grid<C: Taxonomy, W: Write>(
    out: &mut W,
    controller: &FilterAndLightboxController<'_, C>,
) -> io::Result<()> {
    let visible = controller.visible_items();
    if visible.is_empty() {
        return writeln!(out, "  No items in this category yet");
    }
    for item in visible {
        writeln!(out, "{}", card_line(item))?;
    }
    Ok(())
}

pub fn lightbox<C: Taxonomy, W: Write>(out: &mut W, view: &LightboxView<'_, C>) -> io::Result<()> {
    let item = view.item;
    writeln!(out, "== {} {} ==", item.id, item.title)?;
    writeln!(out, "{}", card_line(item).trim_start())?;
    if let Some(description) = &item.description {
        writeln!(out, "{description}")?;
    }
    writeln!(
        out,
        "image {}/{}: {}",
        view.position(),
        view.media_count,
        view.current_media
    )?;
    if view.has_navigation {
        let dots: Vec<&str> = (0..view.media_count)
            .map(|i| if i == view.media_index { "o" } else { "." })
            .collect();
        writeln!(out, "{}  (prev / next / jump <n>)", dots.join(" "))?;
    }
    Ok(())
}

pub fn featured<C: Taxonomy, W: Write>(out: &mut W, store: &CatalogStore<C>) -> io::Result<()> {
    match store.featured() {
        Some(lead) => writeln!(out, "featured: {}", card_line(lead).trim_start())?,
        None => writeln!(out, "featured: none")?,
    }
    for item in store.showcase() {
        writeln!(out, "{}", card_line(item))?;
    }
    Ok(())
}
