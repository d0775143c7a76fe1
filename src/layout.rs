//! # Label Layout Engine
//!
//! Turns one item plus its order context into a label.
//!
//! Layout is split in two steps so positions can be checked without fonts:
//!
//! 1. [`plan_label`] computes the canvas size and the ordered list of text draws.
//!    It is pure and deterministic.
//! 2. [`LabelPlan::paint`] replays that list onto any [`Canvas`].
//!
//! The stock plan for an item with two modifiers looks like this
//! (`y` is the text baseline):
//!
//! ```text
//! y=30   Item: 1 of 3            header face
//! y=50   Items in order: 3       header face
//! y=90   Dana K.                 customer face
//! y=120  LATTE-16                item face
//! y=140    MILK-OAT              item face, indented
//! y=160    SHOT-X
//! ```

use crate::canvas::{Canvas, CanvasError, RasterCanvas, BLACK, WHITE};
use crate::config::LayoutConfig;
use crate::fonts::{FontRole, FontSet};
use crate::model::{Customer, Item};
use image::RgbaImage;

/// A single line of text placed on the label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextDraw {
    pub role: FontRole,
    pub x: i32,
    pub y: i32,
    pub text: String,
}

/// Everything needed to paint one label, minus the fonts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelPlan {
    pub width: u32,
    pub height: u32,
    pub draws: Vec<TextDraw>,
}

/// Computes the layout for the item at zero-based `index` of an order with
/// `item_count` items.
pub fn plan_label(
    index: usize,
    item_count: usize,
    customer: &Customer,
    item: &Item,
    layout: &LayoutConfig,
) -> LabelPlan {
    let mut cursor = Cursor {
        y: layout.start_y,
        draws: Vec::with_capacity(4 + item.child_count()),
    };

    cursor.line(
        FontRole::Header,
        layout.margin_x,
        format!("Item: {} of {}", index + 1, item_count),
        layout.header_advance,
    );
    cursor.line(
        FontRole::Header,
        layout.margin_x,
        format!("Items in order: {item_count}"),
        layout.count_advance,
    );
    cursor.line(
        FontRole::Customer,
        layout.margin_x,
        customer.label_name(),
        layout.customer_advance,
    );
    cursor.line(
        FontRole::Item,
        layout.margin_x,
        item.sku_number.clone(),
        layout.item_advance,
    );
    for child in &item.child_items {
        cursor.line(
            FontRole::Item,
            layout.child_indent_x,
            child.sku_number.clone(),
            layout.child_advance,
        );
    }

    LabelPlan {
        width: layout.canvas_width,
        height: layout.canvas_height(item.child_count()),
        draws: cursor.draws,
    }
}

/// Vertical text cursor: each line is drawn at `y`, then `y` advances.
struct Cursor {
    y: i32,
    draws: Vec<TextDraw>,
}

impl Cursor {
    fn line(&mut self, role: FontRole, x: i32, text: String, advance: i32) {
        self.draws.push(TextDraw {
            role,
            x,
            y: self.y,
            text,
        });
        self.y += advance;
    }
}

impl LabelPlan {
    /// Paints the plan: white background, black text, one face per role.
    pub fn paint<C: Canvas>(&self, canvas: &mut C, fonts: &FontSet) -> Result<(), CanvasError> {
        canvas.clear(WHITE);
        canvas.set_color(BLACK);

        let mut current: Option<FontRole> = None;
        for draw in &self.draws {
            if current != Some(draw.role) {
                canvas.set_font(fonts.face(draw.role));
                current = Some(draw.role);
            }
            canvas.draw_string(&draw.text, draw.x, draw.y)?;
        }
        Ok(())
    }

    /// Paints the plan onto a fresh [`RasterCanvas`] of the planned size.
    pub fn rasterize(&self, fonts: &FontSet) -> Result<RgbaImage, CanvasError> {
        let mut canvas = RasterCanvas::new(self.width, self.height);
        self.paint(&mut canvas, fonts)?;
        Ok(canvas.into_image())
    }
}

/// Lays out and rasterizes one label.
pub fn render_label(
    index: usize,
    item_count: usize,
    customer: &Customer,
    item: &Item,
    layout: &LayoutConfig,
    fonts: &FontSet,
) -> Result<RgbaImage, CanvasError> {
    plan_label(index, item_count, customer, item, layout).rasterize(fonts)
}
