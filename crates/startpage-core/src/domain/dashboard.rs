//! Dashboard Entity
//!
//! A dashboard is the root of one column/group/item tree. The persisted
//! [`Startpage`] holds several dashboards, one of which is active.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::column::Column;
use super::entity::{DashboardId, Entity};

/// Root of the hierarchical tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub id: DashboardId,
    pub name: String,
    #[serde(default)]
    pub columns: Vec<Arc<Column>>,
}

impl Dashboard {
    pub fn new(id: impl Into<DashboardId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            columns: Vec::new(),
        }
    }

    pub fn with_columns(mut self, columns: impl IntoIterator<Item = Column>) -> Self {
        self.columns = columns.into_iter().map(Arc::new).collect();
        self
    }
}

impl Entity for Dashboard {
    type Id = DashboardId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Persisted application root
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Startpage {
    pub dashboards: Vec<Arc<Dashboard>>,
    pub active_dashboard_id: DashboardId,
}

impl Startpage {
    pub fn new(dashboard: Dashboard) -> Self {
        Self {
            active_dashboard_id: dashboard.id.clone(),
            dashboards: vec![Arc::new(dashboard)],
        }
    }

    /// The active dashboard, or the first one when the active id is stale
    pub fn active_dashboard(&self) -> Option<&Arc<Dashboard>> {
        self.dashboards
            .iter()
            .find(|d| d.id == self.active_dashboard_id)
            .or_else(|| self.dashboards.first())
    }

    /// Returns a new startpage with the dashboard of the same id replaced
    pub fn with_active_dashboard(&self, dashboard: Dashboard) -> Self {
        let mut next = self.clone();
        match next.dashboards.iter().position(|d| d.id == dashboard.id) {
            Some(idx) => next.dashboards[idx] = Arc::new(dashboard),
            None => {
                log::warn!("Dashboard {} missing from startpage, appending", dashboard.id);
                next.dashboards.push(Arc::new(dashboard));
            }
        }
        next
    }

    pub fn select_dashboard(&mut self, id: DashboardId) {
        self.active_dashboard_id = id;
    }
}
