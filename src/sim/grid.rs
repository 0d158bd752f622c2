//! Brick grid: fixed layout plus per-cell status
//!
//! Cells are stored row-major. Rows stack downward from `offset_top`, columns
//! run rightward from `offset_left`. Brick rectangles are never cached; they
//! are a pure function of (row, col) and the layout.

use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::config::GameConfig;

/// Brick lifecycle. Broken is permanent for the current game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BrickStatus {
    #[default]
    Active,
    Broken,
}

/// Brick dimensions and spacing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrickLayout {
    pub brick_width: f32,
    pub brick_height: f32,
    pub padding: f32,
    pub offset_top: f32,
    pub offset_left: f32,
}

impl BrickLayout {
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            brick_width: config.brick_width,
            brick_height: config.brick_height,
            padding: config.brick_padding,
            offset_top: config.brick_offset_top,
            offset_left: config.brick_offset_left,
        }
    }

    /// Rectangle of the brick at (row, col)
    pub fn rect(&self, row: usize, col: usize) -> Rect {
        Rect::new(
            col as f32 * (self.brick_width + self.padding) + self.offset_left,
            row as f32 * (self.brick_height + self.padding) + self.offset_top,
            self.brick_width,
            self.brick_height,
        )
    }
}

/// An active brick with its current rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Brick {
    pub row: usize,
    pub col: usize,
    pub rect: Rect,
}

/// Rows x cols grid of bricks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrickGrid {
    rows: usize,
    cols: usize,
    layout: BrickLayout,
    cells: Vec<BrickStatus>,
}

impl BrickGrid {
    /// Create a grid with every brick active
    pub fn new(rows: usize, cols: usize, layout: BrickLayout) -> Self {
        Self {
            rows,
            cols,
            layout,
            cells: vec![BrickStatus::Active; rows * cols],
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(
            config.brick_rows,
            config.brick_cols,
            BrickLayout::from_config(config),
        )
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn layout(&self) -> &BrickLayout {
        &self.layout
    }

    /// Total number of cells, broken or not
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }

    /// Status of a cell, `None` outside the grid
    pub fn status(&self, row: usize, col: usize) -> Option<BrickStatus> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Rectangle of the brick at (row, col), whatever its status
    pub fn rect(&self, row: usize, col: usize) -> Rect {
        self.layout.rect(row, col)
    }

    /// Active bricks in scan order (row by row, left to right)
    ///
    /// Lazy and restartable: each call walks the grid afresh.
    pub fn active_bricks(&self) -> impl Iterator<Item = Brick> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, status)| **status == BrickStatus::Active)
            .map(move |(i, _)| {
                let (row, col) = (i / self.cols, i % self.cols);
                Brick {
                    row,
                    col,
                    rect: self.layout.rect(row, col),
                }
            })
    }

    /// Break the brick at (row, col)
    ///
    /// Returns true only on an Active -> Broken transition. Already broken or
    /// out-of-range cells are left alone.
    pub fn mark_broken(&mut self, row: usize, col: usize) -> bool {
        match self.index(row, col) {
            Some(i) if self.cells[i] == BrickStatus::Active => {
                self.cells[i] = BrickStatus::Broken;
                true
            }
            _ => false,
        }
    }

    pub fn active_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|s| **s == BrickStatus::Active)
            .count()
    }

    pub fn broken_count(&self) -> usize {
        self.len() - self.active_count()
    }

    pub fn is_cleared(&self) -> bool {
        self.active_count() == 0
    }
}
