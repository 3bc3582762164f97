//! Hierarchical layout: artifacts placed on rings stacked by dependency
//! depth.

use std::collections::{BTreeMap, HashMap};

use vantage_config::LayoutConfig;
use vantage_scene::Artifact;

use crate::rings::ring_position;

/// Place each dependency level on its own ring.
///
/// Ring radius grows with the level's population (`max(5, count * 0.5)`),
/// and each level sits at height `level * spacing * 2`.
pub(crate) fn apply(artifacts: &mut [Artifact], config: &LayoutConfig) {
    let levels = dependency_levels(artifacts);

    // Group artifact indices by level, in deterministic level order.
    let mut by_level: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
    for (index, &level) in levels.iter().enumerate() {
        by_level.entry(level).or_default().push(index);
    }

    for (level, members) in &by_level {
        let radius = (members.len() as f32 * 0.5).max(5.0);
        let height = *level as f32 * config.spacing * 2.0;
        for (slot, &index) in members.iter().enumerate() {
            artifacts[index].position = ring_position(slot, members.len(), radius, height);
        }
    }
}

/// Longest-dependency-path depth for each artifact, cycle-safe.
///
/// An artifact's level is `1 + max(level of its dependencies)`, or 0 with
/// no dependencies. Cycles are collapsed first: every member of a
/// strongly connected component shares one level, resolved against the
/// component's external dependencies only (the lowest level consistent
/// with the rest of the graph). Dependency ids with no matching artifact
/// are skipped.
///
/// Returns one level per artifact, parallel to the input slice.
pub fn dependency_levels(artifacts: &[Artifact]) -> Vec<usize> {
    let index_of: HashMap<&str, usize> = artifacts
        .iter()
        .enumerate()
        .map(|(i, a)| (a.id.as_str(), i))
        .collect();

    let adjacency: Vec<Vec<usize>> = artifacts
        .iter()
        .map(|a| {
            a.dependencies
                .iter()
                .filter_map(|dep| index_of.get(dep.as_str()).copied())
                .collect()
        })
        .collect();

    let (component, component_count) = strongly_connected_components(&adjacency);

    // Tarjan emits components in reverse topological order: for any edge
    // v -> w across components, component[w] < component[v]. Processing
    // component ids in ascending order therefore sees every dependency's
    // final level before it is needed.
    let mut component_deps: Vec<Vec<usize>> = vec![Vec::new(); component_count];
    for v in 0..adjacency.len() {
        for &w in &adjacency[v] {
            if component[w] != component[v] {
                component_deps[component[v]].push(component[w]);
            }
        }
    }
    let mut component_level = vec![0usize; component_count];
    for c in 0..component_count {
        component_level[c] = component_deps[c]
            .iter()
            .map(|&dep| component_level[dep] + 1)
            .max()
            .unwrap_or(0);
    }

    (0..artifacts.len())
        .map(|i| component_level[component[i]])
        .collect()
}

/// Iterative Tarjan strongly-connected-components.
///
/// Returns a component id per node and the component count. Component ids
/// are assigned in reverse topological order of the condensation.
fn strongly_connected_components(adjacency: &[Vec<usize>]) -> (Vec<usize>, usize) {
    const UNVISITED: usize = usize::MAX;

    let n = adjacency.len();
    let mut index = vec![UNVISITED; n];
    let mut lowlink = vec![0usize; n];
    let mut component = vec![UNVISITED; n];
    let mut on_stack = vec![false; n];
    let mut stack: Vec<usize> = Vec::new();
    let mut next_index = 0usize;
    let mut component_count = 0usize;

    // Explicit DFS frames: (node, next-edge cursor). Recursion would
    // overflow on deep dependency chains.
    let mut frames: Vec<(usize, usize)> = Vec::new();

    for root in 0..n {
        if index[root] != UNVISITED {
            continue;
        }
        index[root] = next_index;
        lowlink[root] = next_index;
        next_index += 1;
        stack.push(root);
        on_stack[root] = true;
        frames.push((root, 0));

        while let Some(frame) = frames.last_mut() {
            let v = frame.0;
            if frame.1 < adjacency[v].len() {
                let w = adjacency[v][frame.1];
                frame.1 += 1;
                if index[w] == UNVISITED {
                    index[w] = next_index;
                    lowlink[w] = next_index;
                    next_index += 1;
                    stack.push(w);
                    on_stack[w] = true;
                    frames.push((w, 0));
                } else if on_stack[w] {
                    lowlink[v] = lowlink[v].min(index[w]);
                }
            } else {
                if lowlink[v] == index[v] {
                    while let Some(w) = stack.pop() {
                        on_stack[w] = false;
                        component[w] = component_count;
                        if w == v {
                            break;
                        }
                    }
                    component_count += 1;
                }
                frames.pop();
                if let Some(parent) = frames.last() {
                    let p = parent.0;
                    lowlink[p] = lowlink[p].min(lowlink[v]);
                }
            }
        }
    }

    (component, component_count)
}
