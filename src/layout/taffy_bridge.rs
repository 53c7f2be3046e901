//! Taffy Bridge - alignment of one item inside one container.
//!
//! Each placement builds a two-node Taffy tree: a row flex container sized
//! to the container rectangle and a single child carrying the control's
//! size, margins and alignments. Horizontal alignment maps to
//! `justify_content` on the container, vertical alignment to `align_self`
//! on the child, and horizontal stretch to `flex_grow`.

use taffy::{
    AlignItems, AvailableSpace, Dimension, Display, FlexDirection, JustifyContent,
    LengthPercentageAuto, Rect as TaffyRect, Size as TaffySize, Style, TaffyError, TaffyTree,
};

use crate::types::{HorizontalAlignment, Rect, Size, Thickness, VerticalAlignment};

/// What placement needs to know about the item being aligned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ItemSpec {
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub desired: Size,
    pub margin: Thickness,
    pub horizontal: HorizontalAlignment,
    pub vertical: VerticalAlignment,
}

// =============================================================================
// STYLE BUILDING
// =============================================================================

fn to_justify_content(item: &ItemSpec) -> JustifyContent {
    match item.horizontal {
        HorizontalAlignment::Left => JustifyContent::Start,
        HorizontalAlignment::Centre => JustifyContent::Center,
        HorizontalAlignment::Right => JustifyContent::End,
        // stretch with an explicit width centres the item
        HorizontalAlignment::Stretch if item.width.is_some() => JustifyContent::Center,
        HorizontalAlignment::Stretch => JustifyContent::Start,
    }
}

fn to_align_self(item: &ItemSpec) -> AlignItems {
    match item.vertical {
        VerticalAlignment::Top => AlignItems::Start,
        VerticalAlignment::Centre => AlignItems::Center,
        VerticalAlignment::Bottom => AlignItems::End,
        VerticalAlignment::Stretch if item.height.is_some() => AlignItems::Center,
        VerticalAlignment::Stretch => AlignItems::Stretch,
    }
}

fn container_style(container: Rect, item: &ItemSpec) -> Style {
    Style {
        display: Display::Flex,
        flex_direction: FlexDirection::Row,
        justify_content: Some(to_justify_content(item)),
        size: TaffySize {
            width: Dimension::Length(container.width),
            height: Dimension::Length(container.height),
        },
        ..Default::default()
    }
}

fn item_style(item: &ItemSpec) -> Style {
    let stretch_width =
        item.width.is_none() && item.horizontal == HorizontalAlignment::Stretch;
    let stretch_height =
        item.height.is_none() && item.vertical == VerticalAlignment::Stretch;

    let width = match item.width {
        Some(width) => Dimension::Length(width),
        None if stretch_width => Dimension::Auto,
        None => Dimension::Length(item.desired.width),
    };
    let height = match item.height {
        Some(height) => Dimension::Length(height),
        None if stretch_height => Dimension::Auto,
        None => Dimension::Length(item.desired.height),
    };

    Style {
        flex_grow: if stretch_width { 1.0 } else { 0.0 },
        flex_shrink: 0.0,
        align_self: Some(to_align_self(item)),
        size: TaffySize { width, height },
        margin: TaffyRect {
            left: LengthPercentageAuto::Length(item.margin.left),
            right: LengthPercentageAuto::Length(item.margin.right),
            top: LengthPercentageAuto::Length(item.margin.top),
            bottom: LengthPercentageAuto::Length(item.margin.bottom),
        },
        ..Default::default()
    }
}

// =============================================================================
// MAIN ENTRY POINT
// =============================================================================

/// Compute the bounds of `item` inside `container`, in container coordinates.
pub(crate) fn align_within(container: Rect, item: &ItemSpec) -> Result<Rect, TaffyError> {
    let mut tree: TaffyTree<()> = TaffyTree::new();

    let child = tree.new_leaf(item_style(item))?;
    let root = tree.new_with_children(container_style(container, item), &[child])?;

    let available = TaffySize {
        width: AvailableSpace::Definite(container.width),
        height: AvailableSpace::Definite(container.height),
    };
    tree.compute_layout(root, available)?;

    let layout = tree.layout(child)?;
    Ok(Rect::new(
        container.x + layout.location.x,
        container.y + layout.location.y,
        layout.size.width,
        layout.size.height,
    ))
}
