use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use anchorspy::{AnchorSet, OutlineNode, SpyOptions, TrackingState};

/// What a host renderer needs to draw the container and its navigation.
///
/// Markup is left to the host: a container element (`container`, with `class_name`/`style`)
/// holding an optional navigation element (`nav`) with nested `<ul><li><a>` lists, followed by
/// the tracked content.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavModel {
    pub container: String,
    pub class_name: Option<String>,
    pub style: Option<String>,
    /// Tag wrapping the navigation list; `None` renders no navigation.
    pub nav: Option<String>,
    pub items: Vec<NavItem>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavItem {
    pub id: String,
    pub label: String,
    pub href: String,
    pub current: bool,
    /// Class for the entry's link, set on the current entry only.
    pub class: Option<String>,
    pub children: Vec<NavItem>,
}

impl NavModel {
    pub fn build(anchors: &AnchorSet, state: &TrackingState, options: &SpyOptions) -> Self {
        let items = if options.nav.is_some() {
            build_items(anchors, &anchors.outline(), state, options)
        } else {
            Vec::new()
        };
        Self {
            container: options.container.clone(),
            class_name: options.class_name.clone(),
            style: options.style.clone(),
            nav: options.nav.clone(),
            items,
        }
    }

    /// Depth-first iteration over all entries.
    pub fn for_each_item(&self, mut f: impl FnMut(&NavItem, usize)) {
        fn walk(items: &[NavItem], depth: usize, f: &mut dyn FnMut(&NavItem, usize)) {
            for item in items {
                f(item, depth);
                walk(&item.children, depth + 1, f);
            }
        }
        walk(&self.items, 0, &mut f);
    }
}

fn build_items(
    anchors: &AnchorSet,
    nodes: &[OutlineNode],
    state: &TrackingState,
    options: &SpyOptions,
) -> Vec<NavItem> {
    nodes
        .iter()
        .filter_map(|node| {
            let anchor = anchors.get(node.index)?;
            let current = state.is_current(&anchor.id);
            Some(NavItem {
                id: anchor.id.clone(),
                label: anchor.label.clone(),
                href: format!("#{}", anchor.id),
                current,
                class: current.then(|| options.current_class.clone()),
                children: build_items(anchors, &node.children, state, options),
            })
        })
        .collect()
}

/// Classes the host applies to the anchor element named `id`.
///
/// The current anchor gets `current_class`, plus `top_class` while it sits at the trigger line.
pub fn anchor_classes<'a>(
    id: &str,
    state: &TrackingState,
    options: &'a SpyOptions,
) -> Vec<&'a str> {
    let mut classes = Vec::new();
    if state.is_current(id) {
        classes.push(options.current_class.as_str());
        if state.at_top {
            classes.push(options.top_class.as_str());
        }
    }
    classes
}
