use crate::geometry::bounds::Bounds3f;
use crate::geometry::{Ray, Transform};
use crate::interaction::IntersectionList;
use crate::shapes::Shape;

/// A composite shape that doubles as a BVH node.
///
/// Children are owned by value and stored in the group's object space. The union of
/// their parent-space bounds is cached, so a ray that misses it skips the whole subtree.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShapeGroup {
    children: Vec<Shape>,
    bounds: Bounds3f,
}

/// Children sorted by which half of a group's bounding box they fit in.
#[derive(Debug, Default)]
pub struct Partition {
    pub left: Vec<Shape>,
    pub right: Vec<Shape>,
}

impl ShapeGroup {
    pub fn new(children: Vec<Shape>) -> Self {
        let mut group = Self { children, bounds: Bounds3f::empty() };
        group.refresh_bounds();
        group
    }

    pub fn children(&self) -> &[Shape] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn add_child(&mut self, child: Shape) {
        self.bounds = self.bounds.join(&child.parent_space_bounds());
        self.children.push(child);
    }

    /// Union of every child's bounds in this group's object space.
    pub fn bounds(&self) -> Bounds3f {
        self.bounds
    }

    fn refresh_bounds(&mut self) {
        self.bounds = self.children.iter()
            .fold(Bounds3f::empty(), |b, c| b.join(&c.parent_space_bounds()));
    }

    /// `ray` is already in this group's object space; `object_to_world` is the composite
    /// transform of this group.
    pub fn add_intersections<'a>(
        &'a self,
        ray: &Ray,
        object_to_world: &Transform,
        list: &mut IntersectionList<'a>,
    ) {
        if !self.bounds.intersects(ray) {
            return;
        }
        for child in &self.children {
            child.add_intersections(ray, object_to_world, list);
        }
    }

    /// Remove and return the children that fit entirely inside either half of this
    /// group's bounds. Children straddling the split, or fitting neither half, stay.
    pub fn partition(&mut self) -> Partition {
        let (left_bounds, right_bounds) = self.bounds.split();
        let mut partition = Partition::default();
        let mut stays = Vec::new();

        for child in self.children.drain(..) {
            let b = child.parent_space_bounds();
            if left_bounds.contains(&b) {
                partition.left.push(child);
            } else if right_bounds.contains(&b) {
                partition.right.push(child);
            } else {
                stays.push(child);
            }
        }

        self.children = stays;
        self.refresh_bounds();
        partition
    }

    /// Build a BVH below this group: any group holding more than `threshold` children is
    /// split into two subgroups when both halves receive something. Groups among the
    /// children are divided in place.
    pub fn divide(&mut self, threshold: usize) {
        if self.children.len() > threshold {
            let count = self.children.len();
            let Partition { left, right } = self.partition();

            if !left.is_empty() && !right.is_empty() {
                tracing::trace!(count, left = left.len(), right = right.len(), "split group");
                self.add_child(Shape::group(left));
                self.add_child(Shape::group(right));
            } else {
                self.children.extend(left);
                self.children.extend(right);
                self.refresh_bounds();
            }
        }

        for child in &mut self.children {
            child.divide(threshold);
        }
    }

    /// Every leaf below this group, depth first.
    pub fn leaves(&self) -> Vec<&Shape> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a Shape>) {
        for child in &self.children {
            match child.as_group() {
                Some(g) => g.collect_leaves(out),
                None => out.push(child),
            }
        }
    }

    /// Number of groups in this subtree, including this one.
    pub fn group_count(&self) -> usize {
        1 + self.children.iter()
            .filter_map(Shape::as_group)
            .map(ShapeGroup::group_count)
            .sum::<usize>()
    }
}
