use std::collections::{HashSet, VecDeque};
use std::convert::Infallible;

use petgraph::stable_graph::StableUnGraph;
use petgraph::visit::{IntoNeighbors, IntoNodeIdentifiers, NodeIndexable};

use crate::properties::Property;

/// Holds when the graph can be drawn in the plane without crossing edges.
#[derive(Clone, Copy, Debug, Default)]
pub struct Planar;

impl<N, E> Property<N, E> for Planar {
    type Error = Infallible;

    fn holds(&self, graph: &StableUnGraph<N, E>) -> Result<bool, Self::Error> {
        Ok(is_planar(graph))
    }
}

/// Planarity test.
///
/// A graph is planar exactly when each of its biconnected blocks is, and every
/// block is checked by growing a face embedding one path at a time.
pub fn is_planar<G>(graph: G) -> bool
where
    G: IntoNodeIdentifiers + IntoNeighbors + NodeIndexable,
{
    let adjacency = compact_adjacency(graph);
    let vertices = adjacency.len();
    let edges = adjacency.iter().map(Vec::len).sum::<usize>() / 2;

    // Euler: a simple planar graph on v >= 3 vertices has at most 3v - 6 edges
    if vertices >= 3 && edges > 3 * vertices - 6 {
        return false;
    }

    Blocks::of(&adjacency)
        .iter()
        .all(|block| block_is_planar(block))
}

/// Adjacency lists over `0..n`, without loops or parallel edges.
fn compact_adjacency<G>(graph: G) -> Vec<Vec<usize>>
where
    G: IntoNodeIdentifiers + IntoNeighbors + NodeIndexable,
{
    let mut position = vec![None; graph.node_bound()];
    for (compact, vertex) in graph.node_identifiers().enumerate() {
        position[graph.to_index(vertex)] = Some(compact);
    }

    graph
        .node_identifiers()
        .map(|vertex| {
            let own = position[graph.to_index(vertex)];
            let mut neighbors: Vec<usize> = graph
                .neighbors(vertex)
                .filter_map(|next| position[graph.to_index(next)])
                .filter(|&next| Some(next) != own)
                .collect();
            neighbors.sort_unstable();
            neighbors.dedup();
            neighbors
        })
        .collect()
}

/// Tarjan's biconnected blocks, each given as its list of edges.
struct Blocks<'a> {
    adjacency: &'a [Vec<usize>],
    discovery: Vec<Option<usize>>,
    low: Vec<usize>,
    time: usize,
    stack: Vec<(usize, usize)>,
    blocks: Vec<Vec<(usize, usize)>>,
}

impl<'a> Blocks<'a> {
    fn of(adjacency: &'a [Vec<usize>]) -> Vec<Vec<(usize, usize)>> {
        let mut blocks = Blocks {
            adjacency,
            discovery: vec![None; adjacency.len()],
            low: vec![0; adjacency.len()],
            time: 0,
            stack: vec![],
            blocks: vec![],
        };
        for root in 0..adjacency.len() {
            if blocks.discovery[root].is_none() {
                blocks.visit(root, None);
            }
        }
        blocks.blocks
    }

    fn visit(&mut self, vertex: usize, parent: Option<usize>) {
        let discovered = self.time;
        self.discovery[vertex] = Some(discovered);
        self.low[vertex] = discovered;
        self.time += 1;

        let adjacency = self.adjacency;
        for &next in &adjacency[vertex] {
            match self.discovery[next] {
                None => {
                    self.stack.push((vertex, next));
                    self.visit(next, Some(vertex));
                    self.low[vertex] = self.low[vertex].min(self.low[next]);
                    // `vertex` separates the subtree below `next`
                    if self.low[next] >= discovered {
                        let mut block = vec![];
                        while let Some(edge) = self.stack.pop() {
                            block.push(edge);
                            if edge == (vertex, next) {
                                break;
                            }
                        }
                        self.blocks.push(block);
                    }
                }
                Some(seen) if Some(next) != parent && seen < discovered => {
                    self.stack.push((vertex, next));
                    self.low[vertex] = self.low[vertex].min(seen);
                }
                Some(_) => {}
            }
        }
    }
}

/// A part of the block not yet embedded, with the embedded vertices it hangs
/// from and one path through it between two of those vertices.
struct Fragment {
    attachments: Vec<usize>,
    path: Vec<usize>,
}

fn block_is_planar(edges: &[(usize, usize)]) -> bool {
    // a single edge, or a triangle, is trivially planar
    if edges.len() <= 3 {
        return true;
    }

    let mut vertices: Vec<usize> = edges.iter().flat_map(|&(u, v)| [u, v]).collect();
    vertices.sort_unstable();
    vertices.dedup();
    if edges.len() > 3 * vertices.len() - 6 {
        return false;
    }

    let local = |vertex: usize| vertices.binary_search(&vertex).unwrap_or(0);
    let mut adjacency = vec![vec![]; vertices.len()];
    for &(u, v) in edges {
        adjacency[local(u)].push(local(v));
        adjacency[local(v)].push(local(u));
    }
    for neighbors in &mut adjacency {
        neighbors.sort_unstable();
    }

    let Some(cycle) = find_cycle(&adjacency) else {
        return true;
    };

    let mut embedded = vec![false; adjacency.len()];
    let mut embedded_edges = HashSet::new();
    for (position, &vertex) in cycle.iter().enumerate() {
        let next = cycle[(position + 1) % cycle.len()];
        embedded[vertex] = true;
        embedded_edges.insert(ordered(vertex, next));
    }
    let mut faces = vec![cycle.clone(), cycle];

    loop {
        let fragments = fragments(&adjacency, &embedded, &embedded_edges);
        if fragments.is_empty() {
            return true;
        }

        // prefer a fragment that fits into exactly one face
        let mut choice = None;
        for fragment in &fragments {
            let admissible: Vec<usize> = faces
                .iter()
                .enumerate()
                .filter(|(_, face)| fragment.attachments.iter().all(|a| face.contains(a)))
                .map(|(index, _)| index)
                .collect();
            match admissible.as_slice() {
                [] => return false,
                [only] => {
                    choice = Some((fragment, *only));
                    break;
                }
                [first, ..] => {
                    if choice.is_none() {
                        choice = Some((fragment, *first));
                    }
                }
            }
        }
        let Some((fragment, face)) = choice else {
            return true;
        };

        let (inside, outside) = split_face(&faces[face], &fragment.path);
        faces[face] = inside;
        faces.push(outside);
        for pair in fragment.path.windows(2) {
            embedded[pair[0]] = true;
            embedded[pair[1]] = true;
            embedded_edges.insert(ordered(pair[0], pair[1]));
        }
    }
}

fn ordered(u: usize, v: usize) -> (usize, usize) {
    if u < v {
        (u, v)
    } else {
        (v, u)
    }
}

/// Any cycle of a biconnected block: a path from a neighbour of vertex 0 back
/// to vertex 0 that avoids the edge between them.
fn find_cycle(adjacency: &[Vec<usize>]) -> Option<Vec<usize>> {
    let first = *adjacency.first()?.first()?;
    let mut parent = vec![None; adjacency.len()];
    let mut reached = vec![false; adjacency.len()];
    let mut queue = VecDeque::from([first]);
    reached[first] = true;

    while let Some(vertex) = queue.pop_front() {
        for &next in &adjacency[vertex] {
            if vertex == first && next == 0 {
                continue;
            }
            if reached[next] {
                continue;
            }
            reached[next] = true;
            parent[next] = Some(vertex);
            if next == 0 {
                let mut cycle = vec![0];
                let mut current = vertex;
                cycle.push(current);
                while let Some(previous) = parent[current] {
                    cycle.push(previous);
                    current = previous;
                }
                return Some(cycle);
            }
            queue.push_back(next);
        }
    }

    None
}

fn fragments(
    adjacency: &[Vec<usize>],
    embedded: &[bool],
    embedded_edges: &HashSet<(usize, usize)>,
) -> Vec<Fragment> {
    let mut fragments = vec![];

    // chords: unembedded edges between embedded vertices
    for (u, neighbors) in adjacency.iter().enumerate() {
        for &v in neighbors {
            if u < v && embedded[u] && embedded[v] && !embedded_edges.contains(&(u, v)) {
                fragments.push(Fragment {
                    attachments: vec![u, v],
                    path: vec![u, v],
                });
            }
        }
    }

    // components of the unembedded vertices
    let mut assigned = embedded.to_vec();
    for start in 0..adjacency.len() {
        if assigned[start] {
            continue;
        }

        let mut members = vec![start];
        let mut attachments = vec![];
        assigned[start] = true;
        let mut cursor = 0;
        while let Some(&vertex) = members.get(cursor) {
            cursor += 1;
            for &next in &adjacency[vertex] {
                if embedded[next] {
                    attachments.push(next);
                } else if !assigned[next] {
                    assigned[next] = true;
                    members.push(next);
                }
            }
        }
        attachments.sort_unstable();
        attachments.dedup();

        if let Some(path) = path_through(adjacency, embedded, &members, &attachments) {
            fragments.push(Fragment { attachments, path });
        }
    }

    fragments
}

/// A path from one attachment through the component `members` to a different
/// attachment.
fn path_through(
    adjacency: &[Vec<usize>],
    embedded: &[bool],
    members: &[usize],
    attachments: &[usize],
) -> Option<Vec<usize>> {
    let &from = attachments.first()?;
    let &entry = adjacency[from]
        .iter()
        .find(|&&next| !embedded[next] && members.contains(&next))?;

    let mut parent = vec![None; adjacency.len()];
    let mut reached = vec![false; adjacency.len()];
    let mut queue = VecDeque::from([entry]);
    reached[entry] = true;

    while let Some(vertex) = queue.pop_front() {
        let exit = adjacency[vertex]
            .iter()
            .find(|&&next| embedded[next] && next != from);
        if let Some(&to) = exit {
            let mut inner = vec![vertex];
            let mut current = vertex;
            while let Some(previous) = parent[current] {
                inner.push(previous);
                current = previous;
            }
            inner.reverse();

            let mut path = vec![from];
            path.extend(inner);
            path.push(to);
            return Some(path);
        }

        for &next in &adjacency[vertex] {
            if !embedded[next] && !reached[next] {
                reached[next] = true;
                parent[next] = Some(vertex);
                queue.push_back(next);
            }
        }
    }

    None
}

/// Split `face` along `path`, whose two ends lie on the face and whose inner
/// vertices are new.
fn split_face(face: &[usize], path: &[usize]) -> (Vec<usize>, Vec<usize>) {
    let (Some(&from), Some(&to)) = (path.first(), path.last()) else {
        return (face.to_vec(), vec![]);
    };
    let start = face.iter().position(|&v| v == from).unwrap_or(0);
    let end = face.iter().position(|&v| v == to).unwrap_or(0);
    let inner = &path[1..path.len() - 1];

    let walk = |begin: usize, finish: usize| {
        let mut boundary = vec![];
        let mut position = begin;
        loop {
            boundary.push(face[position]);
            if position == finish {
                break boundary;
            }
            position = (position + 1) % face.len();
        }
    };

    let mut first = walk(start, end);
    first.extend(inner.iter().rev());
    let mut second = walk(end, start);
    second.extend(inner.iter());

    (first, second)
}
