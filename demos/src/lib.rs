// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared scaffolding for the Understory demos.
//!
//! [`TextStrip`] is a stand-in for a real UI toolkit: a scroll container whose
//! pooled elements are [`Cell`]s carrying a line of text.

use kurbo::{Point, Size};
use understory_recycler::{
    Direction, ElementFactory, Geometry, Recycler, ScrollContainer, VisualElement,
};

/// A pooled text cell.
#[derive(Debug, Clone, Default)]
pub struct Cell {
    /// Serial number assigned when the cell was instantiated.
    pub serial: usize,
    /// Local position inside the content strip.
    pub position: Point,
    /// Logical index the cell was last tagged with.
    pub name: Option<usize>,
    /// Text loaded by the binder.
    pub text: String,
}

impl VisualElement for Cell {
    fn position(&self) -> Point {
        self.position
    }

    fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    fn set_logical_index(&mut self, index: usize) {
        self.name = Some(index);
    }
}

/// A scroll container over [`Cell`]s with a fixed item template.
#[derive(Debug, Clone)]
pub struct TextStrip {
    /// Size of the item template.
    pub template: Size,
    /// Size of the visible viewport.
    pub viewport: Size,
    /// Local position of the content strip.
    pub offset: Point,
    /// Content size last set by the engine.
    pub content_size: Size,
    /// Axis the strip was locked to.
    pub locked: Option<Direction>,
    instantiated: usize,
}

impl TextStrip {
    /// Creates a strip with the given template and viewport sizes.
    pub fn new(template: Size, viewport: Size) -> Self {
        Self {
            template,
            viewport,
            offset: Point::ZERO,
            content_size: Size::ZERO,
            locked: None,
            instantiated: 0,
        }
    }

    /// Number of cells created so far.
    pub fn instantiated(&self) -> usize {
        self.instantiated
    }

    /// Drags the content `delta` units in the advancing direction.
    pub fn drag(&mut self, delta: f64) {
        let axis = self.locked.unwrap_or_default().axis();
        let value = axis.component(self.offset) + axis.sign() * delta;
        self.offset = axis.with_component(self.offset, value);
    }
}

impl Geometry for TextStrip {
    fn item_size(&self) -> Option<Size> {
        Some(self.template)
    }

    fn viewport_size(&self) -> Option<Size> {
        Some(self.viewport)
    }
}

impl ScrollContainer for TextStrip {
    fn content_offset(&self) -> Point {
        self.offset
    }

    fn set_content_size(&mut self, size: Size) {
        self.content_size = size;
    }

    fn scroll_to_start(&mut self) {
        self.offset = Point::ZERO;
    }

    fn lock_axis(&mut self, direction: Direction) {
        self.locked = Some(direction);
    }
}

impl ElementFactory for TextStrip {
    type Element = Cell;

    fn create_element(&mut self) -> Option<Cell> {
        let serial = self.instantiated;
        self.instantiated += 1;
        Some(Cell {
            serial,
            ..Cell::default()
        })
    }
}

/// One line per pooled cell, in slot order.
pub fn describe(list: &Recycler<TextStrip>) -> String {
    list.slots()
        .map(|(cell, index)| {
            format!(
                "  slot cell#{:<2} item {:>3} at {:>8.1}  {}\n",
                cell.serial,
                index,
                list.direction().axis().component(cell.position),
                cell.text
            )
        })
        .collect()
}
