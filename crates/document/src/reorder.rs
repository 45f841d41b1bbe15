//! Pure permutations of photo content between month slots.
//!
//! A slot's identity (its `month_index`, and with it the month name and
//! grid) never moves; only the content vector - image, accent, anchor,
//! font - is permuted across the fixed slots.

use crate::content::{FontFamily, ImageRef, MonthContent, TextAnchor};
use rand::Rng;
use rand::seq::SliceRandom;
use strata_types::Color;

/// The fields that travel when slots are reordered.
#[derive(Debug, Clone, PartialEq)]
struct SlotContent {
    image: Option<ImageRef>,
    accent: Color,
    anchor: TextAnchor,
    font: FontFamily,
}

fn extract(months: &[MonthContent]) -> Vec<SlotContent> {
    months
        .iter()
        .map(|m| SlotContent {
            image: m.image.clone(),
            accent: m.accent,
            anchor: m.anchor,
            font: m.font,
        })
        .collect()
}

fn apply(months: &mut [MonthContent], contents: Vec<SlotContent>) {
    for (slot, content) in months.iter_mut().zip(contents) {
        slot.image = content.image;
        slot.accent = content.accent;
        slot.anchor = content.anchor;
        slot.font = content.font;
    }
}

/// Moves the content of slot `from` so it lands at slot `to`, shifting the
/// slots in between (drag-and-drop semantics). Out-of-range indices and
/// no-op moves leave the slice untouched.
pub fn move_content(months: &mut [MonthContent], from: usize, to: usize) {
    if from == to || from >= months.len() || to >= months.len() {
        return;
    }
    let mut contents = extract(months);
    let item = contents.remove(from);
    contents.insert(to, item);
    apply(months, contents);
}

/// Reverses the content order across all slots.
pub fn reverse_content(months: &mut [MonthContent]) {
    let mut contents = extract(months);
    contents.reverse();
    apply(months, contents);
}

/// Fisher-Yates shuffle of the content across all slots.
pub fn shuffle_content<R: Rng + ?Sized>(months: &mut [MonthContent], rng: &mut R) {
    let mut contents = extract(months);
    contents.shuffle(rng);
    apply(months, contents);
}
