// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A recording host for engine tests.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;

use kurbo::{Point, Size};

use crate::{Direction, ElementFactory, Geometry, ScrollContainer, VisualElement};

/// Element with a stable identity so tests can tell reuse from recreation.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct TestElement {
    pub(crate) id: usize,
    pub(crate) position: Point,
    pub(crate) tag: Option<usize>,
}

impl VisualElement for TestElement {
    fn position(&self) -> Point {
        self.position
    }

    fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    fn set_logical_index(&mut self, index: usize) {
        self.tag = Some(index);
    }
}

#[derive(Debug)]
pub(crate) struct TestHost {
    pub(crate) item: Option<Size>,
    pub(crate) viewport: Option<Size>,
    pub(crate) offset: Point,
    pub(crate) rest: Point,
    pub(crate) content_size: Size,
    pub(crate) locked: Option<Direction>,
    pub(crate) created: usize,
    pub(crate) released: Vec<usize>,
    /// Refuse to create elements once `created` reaches this.
    pub(crate) creation_limit: Option<usize>,
}

impl TestHost {
    pub(crate) fn new(item: Size, viewport: Size) -> Self {
        Self {
            item: Some(item),
            viewport: Some(viewport),
            offset: Point::new(0.0, 3.0),
            rest: Point::new(0.0, 3.0),
            content_size: Size::ZERO,
            locked: None,
            created: 0,
            released: Vec::new(),
            creation_limit: None,
        }
    }

    /// Moves content `distance` units past its rest position in the advancing sense.
    pub(crate) fn scroll_forward(&mut self, direction: Direction, distance: f64) {
        let axis = direction.axis();
        let value = axis.component(self.rest) + axis.sign() * distance;
        self.offset = axis.with_component(self.offset, value);
    }
}

impl Geometry for TestHost {
    fn item_size(&self) -> Option<Size> {
        self.item
    }

    fn viewport_size(&self) -> Option<Size> {
        self.viewport
    }
}

impl ScrollContainer for TestHost {
    fn content_offset(&self) -> Point {
        self.offset
    }

    fn set_content_size(&mut self, size: Size) {
        self.content_size = size;
    }

    fn scroll_to_start(&mut self) {
        self.offset = self.rest;
    }

    fn lock_axis(&mut self, direction: Direction) {
        self.locked = Some(direction);
    }
}

impl ElementFactory for TestHost {
    type Element = TestElement;

    fn create_element(&mut self) -> Option<TestElement> {
        if self.creation_limit.is_some_and(|limit| self.created >= limit) {
            return None;
        }
        let id = self.created;
        self.created += 1;
        Some(TestElement {
            id,
            position: Point::new(0.0, 7.0),
            tag: None,
        })
    }

    fn release_element(&mut self, element: TestElement) {
        self.released.push(element.id);
    }
}

/// Shared log of `(element id, logical index)` binder calls.
pub(crate) type BindLog = Rc<RefCell<Vec<(usize, usize)>>>;

pub(crate) fn recording_binder() -> (BindLog, impl FnMut(&mut TestElement, usize) + 'static) {
    let log = BindLog::default();
    let sink = Rc::clone(&log);
    let binder = move |element: &mut TestElement, index: usize| {
        sink.borrow_mut().push((element.id, index));
    };
    (log, binder)
}
