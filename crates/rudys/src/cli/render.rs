//! Turns a [`CmdResult`] into terminal text.
//!
//! Every populated part of the result is rendered in a fixed order, followed
//! by the messages. Column widths are measured with `unicode-width` so names
//! and prices with non-ASCII characters (₹, accents) stay aligned.

use super::styles;
use rudysapp::commands::{CmdMessage, CmdResult, MessageLevel};
use rudysapp::geo::RankedStore;
use rudysapp::layout::LayoutSuggestion;
use rudysapp::map::MapView;
use rudysapp::model::{Item, Store, StoreOwner, StoreSummary};
use rudysapp::session::PendingVerification;
use std::fmt::Write;
use unicode_width::UnicodeWidthStr;

pub fn render_json(result: &CmdResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(result)
}

pub fn render_result(result: &CmdResult) -> String {
    let mut out = String::new();

    if let Some(owner) = &result.owner {
        out.push_str(&render_owner(owner));
    }
    if let Some(pending) = &result.pending {
        out.push_str(&render_pending(pending));
    }
    match (&result.summary, result.stores.as_slice()) {
        (Some(summary), [store]) => out.push_str(&render_store_detail(store, summary)),
        (Some(summary), []) => out.push_str(&render_summary(summary)),
        _ => out.push_str(&render_stores(&result.stores)),
    }
    out.push_str(&render_ranked(&result.ranked));
    if let Some(suggestion) = &result.suggestion {
        out.push_str(&render_suggestion(suggestion));
    }
    match &result.map {
        Some(view) => out.push_str(&render_map(view)),
        None => out.push_str(&render_items(&result.items)),
    }
    out.push_str(&render_messages(&result.messages));
    out
}

pub fn render_stores(stores: &[Store]) -> String {
    let id_width = column_width(stores.iter().map(|s| s.id.as_str()));
    let name_width = column_width(stores.iter().map(|s| s.name.as_str()));

    let mut out = String::new();
    for store in stores {
        let _ = writeln!(
            out,
            "{}  {}  {}",
            styles::id().apply_to(pad(store.id.as_str(), id_width)),
            styles::title().apply_to(pad(&store.name, name_width)),
            styles::muted().apply_to(&store.address)
        );
    }
    out
}

pub fn render_store_detail(store: &Store, summary: &StoreSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} {}",
        styles::title().apply_to(&store.name),
        styles::id().apply_to(format!("[{}]", store.id))
    );
    let _ = writeln!(out, "{}", styles::muted().apply_to(&store.address));
    let _ = writeln!(out, "{}", styles::muted().apply_to(store.coordinates));
    out.push_str(&render_summary(summary));
    if !store.items.is_empty() {
        out.push('\n');
        out.push_str(&render_items(&store.items));
    }
    out
}

pub fn render_summary(summary: &StoreSummary) -> String {
    format!(
        "{} items in {} aisles, {} sections\n",
        summary.item_count, summary.aisle_count, summary.section_count
    )
}

pub fn render_items(items: &[Item]) -> String {
    let id_width = column_width(items.iter().map(|i| i.id.as_str()));
    let name_width = column_width(items.iter().map(|i| i.name.as_str()));
    let places: Vec<String> = items.iter().map(place).collect();
    let place_width = column_width(places.iter().map(String::as_str));

    let mut out = String::new();
    for (item, place) in items.iter().zip(&places) {
        let price = item.price.as_deref().unwrap_or("");
        let line = format!(
            "{}  {}  {}  {}",
            styles::id().apply_to(pad(item.id.as_str(), id_width)),
            pad(&item.name, name_width),
            styles::aisle().apply_to(pad(place, place_width)),
            styles::price().apply_to(price)
        );
        let _ = writeln!(out, "{}", line.trim_end());
    }
    out
}

pub fn render_ranked(ranked: &[RankedStore]) -> String {
    let name_width = column_width(ranked.iter().map(|r| r.store.name.as_str()));
    let distances: Vec<String> = ranked
        .iter()
        .map(|r| format!("{:.1} km", r.distance_km))
        .collect();
    let distance_width = column_width(distances.iter().map(String::as_str));

    let mut out = String::new();
    for (entry, distance) in ranked.iter().zip(&distances) {
        let _ = writeln!(
            out,
            "{}  {}  {}  {}",
            styles::distance().apply_to(format!("{distance:>distance_width$}")),
            styles::title().apply_to(pad(&entry.store.name, name_width)),
            styles::id().apply_to(entry.store.id.as_str()),
            styles::muted().apply_to(&entry.store.address)
        );
    }
    out
}

pub fn render_map(view: &MapView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "center {}  zoom {}", view.center, view.zoom);
    for marker in &view.markers {
        let label = if marker.highlighted {
            styles::highlight().apply_to(&marker.label).to_string()
        } else {
            marker.label.clone()
        };
        let _ = writeln!(
            out,
            "  {} {}",
            label,
            styles::muted().apply_to(format!("@ {}", marker.position))
        );
    }
    out
}

pub fn render_owner(owner: &StoreOwner) -> String {
    let contact = owner.phone.as_deref().unwrap_or(&owner.email);
    format!(
        "{} {} {}\n",
        styles::title().apply_to(&owner.name),
        styles::muted().apply_to(contact),
        styles::muted().apply_to(format!("({})", owner.provider))
    )
}

pub fn render_pending(pending: &PendingVerification) -> String {
    format!(
        "Run {} with the code sent to {}\n",
        styles::title().apply_to("rudys owner verify <code>"),
        pending.contact
    )
}

pub fn render_suggestion(suggestion: &LayoutSuggestion) -> String {
    let layout = &suggestion.layout;
    let mut out = String::new();
    for aisle in &layout.aisles {
        let sections: Vec<&str> = layout
            .sections
            .iter()
            .filter(|s| s.aisle_id == aisle.id)
            .map(|s| s.name.as_str())
            .collect();
        let _ = writeln!(
            out,
            "{}  {}",
            styles::aisle().apply_to(&aisle.name),
            sections.join(", ")
        );
    }
    for landmark in layout.entrances.iter().chain(&layout.checkouts) {
        let _ = writeln!(out, "{}", styles::muted().apply_to(&landmark.name));
    }
    if !suggestion.suggestions.is_empty() {
        let names: Vec<&str> = suggestion.suggestions.iter().map(|s| s.name.as_str()).collect();
        let _ = writeln!(out, "Suggested items: {}", names.join(", "));
    }
    out
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => styles::muted().apply_to(&message.content).to_string(),
            MessageLevel::Success => styles::success().apply_to(&message.content).to_string(),
            MessageLevel::Warning => styles::warning().apply_to(&message.content).to_string(),
        };
        let _ = writeln!(out, "{}", line);
    }
    out
}

fn place(item: &Item) -> String {
    format!("{} · {}", item.aisle, item.section)
}

fn column_width<'a>(values: impl Iterator<Item = &'a str>) -> usize {
    values.map(UnicodeWidthStr::width).max().unwrap_or(0)
}

/// Left-aligns `value` to `width` terminal columns.
fn pad(value: &str, width: usize) -> String {
    let fill = width.saturating_sub(value.width());
    format!("{}{}", value, " ".repeat(fill))
}
