//! Object hierarchy: ancestor chains and descendant sets over the
//! parent-pointer forest.
//!
//! The whole forest is loaded once per request and walked in memory. Every
//! walk carries a visited set, so malformed data (a parent chain that loops)
//! fails with [`AppError::Cycle`] instead of spinning forever.

use crate::db::queries::load_objects;
use crate::errors::{AppError, AppResult};
use crate::models::MaintenanceObject;
use rusqlite::Connection;
use std::collections::{HashMap, HashSet, VecDeque};

#[derive(Debug, Default, Clone)]
pub struct Forest {
    nodes: HashMap<i64, MaintenanceObject>,
    /// parent id → child ids, ascending
    children: HashMap<i64, Vec<i64>>,
    roots: Vec<i64>,
}

impl Forest {
    pub fn new(objects: impl IntoIterator<Item = MaintenanceObject>) -> Self {
        let mut objects: Vec<MaintenanceObject> = objects.into_iter().collect();
        objects.sort_by_key(|o| o.id);

        let mut forest = Forest::default();
        for obj in objects {
            match obj.parent_id {
                Some(pid) => forest.children.entry(pid).or_default().push(obj.id),
                None => forest.roots.push(obj.id),
            }
            forest.nodes.insert(obj.id, obj);
        }
        forest
    }

    pub fn load(conn: &Connection) -> AppResult<Self> {
        let forest = Self::new(load_objects(conn)?);
        tracing::debug!(objects = forest.len(), "loaded object forest");
        Ok(forest)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, id: i64) -> AppResult<&MaintenanceObject> {
        self.nodes
            .get(&id)
            .ok_or_else(|| AppError::object_not_found(id))
    }

    /// All object ids, ascending.
    pub fn ids(&self) -> Vec<i64> {
        let mut ids: Vec<i64> = self.nodes.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Direct children of `parent`, or the roots when `parent` is `None`.
    pub fn children(&self, parent: Option<i64>) -> AppResult<Vec<MaintenanceObject>> {
        let ids = match parent {
            Some(pid) => {
                self.get(pid)?;
                self.children.get(&pid).map(Vec::as_slice).unwrap_or(&[])
            }
            None => self.roots.as_slice(),
        };
        Ok(ids.iter().map(|id| self.nodes[id].clone()).collect())
    }

    /// Chain from the top-level root down to, but excluding, `id`.
    pub fn ancestors(&self, id: i64) -> AppResult<Vec<MaintenanceObject>> {
        let mut visited: HashSet<i64> = HashSet::from([id]);
        let mut chain = Vec::new();
        let mut current = self.get(id)?.parent_id;

        while let Some(pid) = current {
            if !visited.insert(pid) {
                return Err(AppError::Cycle(pid));
            }
            let parent = self.get(pid)?;
            chain.push(parent.clone());
            current = parent.parent_id;
        }

        chain.reverse();
        Ok(chain)
    }

    /// Every object below `id`, excluding `id` itself.
    ///
    /// Breadth first; siblings come in ascending id order.
    pub fn descendants(&self, id: i64) -> AppResult<Vec<MaintenanceObject>> {
        self.get(id)?;

        let mut visited: HashSet<i64> = HashSet::from([id]);
        let mut queue: VecDeque<i64> = VecDeque::from([id]);
        let mut out = Vec::new();

        while let Some(current) = queue.pop_front() {
            let Some(kids) = self.children.get(&current) else {
                continue;
            };
            for &child in kids {
                if !visited.insert(child) {
                    return Err(AppError::Cycle(child));
                }
                out.push(self.nodes[&child].clone());
                queue.push_back(child);
            }
        }

        Ok(out)
    }

    /// `id` followed by all its descendants.
    pub fn subtree_ids(&self, id: i64) -> AppResult<Vec<i64>> {
        let mut ids = vec![id];
        ids.extend(self.descendants(id)?.into_iter().map(|o| o.id));
        Ok(ids)
    }

    /// Ancestors followed by the object itself, for breadcrumb trails.
    pub fn breadcrumbs(&self, id: i64) -> AppResult<Vec<MaintenanceObject>> {
        let mut trail = self.ancestors(id)?;
        trail.push(self.get(id)?.clone());
        Ok(trail)
    }
}
