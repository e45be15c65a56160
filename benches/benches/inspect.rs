// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for region lookup and full scans.
//!
//! By default this uses a deterministic synthetic hierarchy shaped like a list screen: a view
//! tree with a toolbar and a host view whose layout tree holds many rows. To benchmark a real
//! screen, set `INSPECT_HIERARCHY_JSON` to the path of a JSON dump matching [`DumpView`].

use core::time::Duration;
use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use understory_inspect::Inspector;
use understory_region_tree::{
    ElementFlags, LayoutId, LayoutNode, LayoutTree, ScanLimits, TraversalPolicy, ViewId, ViewNode,
    ViewTree, locate, scan_all,
};

const ENV_JSON_PATH: &str = "INSPECT_HIERARCHY_JSON";

const POLICIES: [(&str, TraversalPolicy); 2] = [
    ("hierarchical", TraversalPolicy::Hierarchical),
    ("depth_first", TraversalPolicy::DepthFirst),
];

#[derive(Clone, Copy, Debug, Deserialize)]
struct DumpRect {
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
}

impl DumpRect {
    fn to_rect(self) -> Rect {
        Rect::new(self.x0, self.y0, self.x1, self.y1)
    }
}

#[derive(Clone, Debug, Deserialize)]
struct DumpLayout {
    bounds: DumpRect,
    #[serde(default)]
    clickable: bool,
    #[serde(default)]
    children: Vec<DumpLayout>,
}

#[derive(Clone, Debug, Deserialize)]
struct DumpView {
    bounds: DumpRect,
    #[serde(default)]
    clickable: bool,
    #[serde(default)]
    content: Vec<DumpLayout>,
    #[serde(default)]
    children: Vec<DumpView>,
}

fn flags(clickable: bool) -> ElementFlags {
    if clickable {
        ElementFlags::VISIBLE | ElementFlags::CLICKABLE
    } else {
        ElementFlags::VISIBLE
    }
}

fn build_tree_from_json(path: &Path) -> ViewTree {
    let bytes = fs::read(path).unwrap_or_else(|e| panic!("failed to read {path:?}: {e}"));
    let dump: DumpView =
        serde_json::from_slice(&bytes).unwrap_or_else(|e| panic!("invalid JSON {path:?}: {e}"));
    let mut tree = ViewTree::new();
    build_view_from_dump(&mut tree, None, &dump);
    tree
}

fn build_view_from_dump(tree: &mut ViewTree, parent: Option<ViewId>, dump: &DumpView) {
    let mut node = ViewNode::new(dump.bounds.to_rect()).with_flags(flags(dump.clickable));
    if !dump.content.is_empty() {
        let mut content = LayoutTree::new();
        for root in &dump.content {
            build_layout_from_dump(&mut content, None, root);
        }
        node = node.with_content(content);
    }
    let id = tree.insert(parent, node).expect("dump bounds are valid");
    for child in &dump.children {
        build_view_from_dump(tree, Some(id), child);
    }
}

fn build_layout_from_dump(tree: &mut LayoutTree, parent: Option<LayoutId>, dump: &DumpLayout) {
    let node = LayoutNode::new(dump.bounds.to_rect()).with_flags(flags(dump.clickable));
    let id = tree.insert(parent, node).expect("dump bounds are valid");
    for child in &dump.children {
        build_layout_from_dump(tree, Some(id), child);
    }
}

/// Synthetic list screen.
///
/// - decor view with a toolbar of 8 clickable icons
/// - a host view with a layout column of `rows` rows
/// - each row: a clickable card with an avatar, two text lines, and an overflowing badge
fn build_synthetic_tree(rows: usize) -> ViewTree {
    let width = 1080.0;
    let row_height = 120.0;
    let height = 160.0 + row_height * rows as f64;

    let mut content = LayoutTree::new();
    let column = content
        .insert(None, LayoutNode::new(Rect::new(0.0, 160.0, width, height)))
        .unwrap();
    for i in 0..rows {
        let y = 160.0 + row_height * i as f64;
        let card = content
            .insert(
                Some(column),
                LayoutNode::new(Rect::new(16.0, y + 8.0, width - 16.0, y + row_height - 8.0))
                    .with_flags(flags(true)),
            )
            .unwrap();
        for (x0, y0, x1, y1) in [
            (32.0, 16.0, 112.0, 96.0),
            (128.0, 20.0, 700.0, 56.0),
            (128.0, 60.0, 900.0, 92.0),
            (980.0, 0.0, 1070.0, 40.0),
        ] {
            content
                .insert(Some(card), LayoutNode::new(Rect::new(x0, y + y0, x1, y + y1)))
                .unwrap();
        }
    }

    let mut tree = ViewTree::new();
    let decor = tree
        .insert(None, ViewNode::new(Rect::new(0.0, 0.0, width, height)))
        .unwrap();
    let toolbar = tree
        .insert(Some(decor), ViewNode::new(Rect::new(0.0, 0.0, width, 160.0)))
        .unwrap();
    for i in 0..8 {
        let x = 16.0 + 128.0 * f64::from(i);
        tree.insert(
            Some(toolbar),
            ViewNode::new(Rect::new(x, 32.0, x + 96.0, 128.0)).with_flags(flags(true)),
        )
        .unwrap();
    }
    tree.insert(
        Some(decor),
        ViewNode::new(Rect::new(0.0, 160.0, width, height)).with_content(content),
    )
    .unwrap();
    tree
}

fn scenes() -> Vec<(String, ViewTree)> {
    if let Ok(path) = std::env::var(ENV_JSON_PATH) {
        return vec![("json".into(), build_tree_from_json(Path::new(&path)))];
    }
    [10_usize, 100, 1_000]
        .into_iter()
        .map(|rows| (format!("rows_{rows}"), build_synthetic_tree(rows)))
        .collect()
}

fn probe_points(tree: &ViewTree) -> Vec<Point> {
    let bounds = tree
        .roots()
        .iter()
        .filter_map(|id| tree.get(*id))
        .fold(Rect::ZERO, |acc, v| acc.union(v.bounds));
    (0..64)
        .map(|i| {
            let fx = f64::from(i % 8) / 8.0 + 1.0 / 16.0;
            let fy = f64::from(i / 8) / 8.0 + 1.0 / 16.0;
            Point::new(
                bounds.x0 + bounds.width() * fx,
                bounds.y0 + bounds.height() * fy,
            )
        })
        .collect()
}

fn inspect(c: &mut Criterion) {
    let scenes = scenes();

    let mut g_locate = c.benchmark_group("inspect/locate");
    g_locate.measurement_time(Duration::from_secs(3));
    for (name, tree) in &scenes {
        let points = probe_points(tree);
        for (policy_name, policy) in POLICIES {
            g_locate.bench_function(BenchmarkId::new(policy_name, name), |b| {
                b.iter(|| {
                    for pt in &points {
                        black_box(locate(tree, *pt, policy));
                    }
                });
            });
        }
    }
    g_locate.finish();

    let mut g_scan = c.benchmark_group("inspect/scan_all");
    g_scan.measurement_time(Duration::from_secs(3));
    for (name, tree) in &scenes {
        for (policy_name, policy) in POLICIES {
            g_scan.bench_function(BenchmarkId::new(policy_name, name), |b| {
                b.iter(|| black_box(scan_all(tree, policy, ScanLimits::UNBOUNDED)));
            });
        }
        let capped = ScanLimits {
            max_depth: Some(4),
            max_regions: Some(256),
        };
        g_scan.bench_function(BenchmarkId::new("capped", name), |b| {
            b.iter(|| black_box(scan_all(tree, TraversalPolicy::Hierarchical, capped)));
        });
    }
    g_scan.finish();

    let mut g_gestures = c.benchmark_group("inspect/gestures");
    for (name, tree) in &scenes {
        let points = probe_points(tree);
        g_gestures.bench_function(BenchmarkId::new("tap_long_press", name), |b| {
            b.iter_batched(
                || {
                    let mut inspector = Inspector::new(tree, || {});
                    inspector.start_session();
                    inspector
                },
                |mut inspector| {
                    for pt in &points {
                        inspector.long_press(*pt);
                        inspector.tap(*pt);
                    }
                    black_box(inspector.relative_distances());
                },
                BatchSize::SmallInput,
            );
        });
    }
    g_gestures.finish();
}

criterion_group!(benches, inspect);
criterion_main!(benches);
