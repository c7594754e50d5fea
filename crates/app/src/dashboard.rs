//! In-memory dashboard model and the store the render layer subscribes to.
//!
//! The page used to be its own state store (status text and classes, gauge
//! text). [`DashboardState`] keeps that state explicitly; renderers
//! subscribe to [`DashboardChange`]s through a [`DashboardStore`] and redraw
//! only what changed.

use std::cell::RefCell;
use std::collections::BTreeMap;

use pyropanel_domain::chart::ChartBuffer;
use pyropanel_domain::error::ValidationError;
use pyropanel_domain::id::ServerId;
use pyropanel_domain::server::ServerStatus;
use pyropanel_domain::stats::{Resource, ResourceGauges, ResourceSample};

/// What changed in a [`DashboardState`] mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardChange {
    /// A server's status was set.
    Status {
        server_id: ServerId,
        status: ServerStatus,
    },
    /// These gauges received a new value.
    Gauges(Vec<Resource>),
    /// A point was appended to the chart buffer.
    Chart,
}

/// Server statuses, resource gauges and the rolling chart buffer.
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    statuses: BTreeMap<ServerId, ServerStatus>,
    gauges: ResourceGauges,
    chart: ChartBuffer,
}

impl DashboardState {
    /// Create an empty state whose chart keeps `chart_capacity` points.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::ZeroCapacity`] when `chart_capacity` is zero.
    pub fn new(chart_capacity: usize) -> Result<Self, ValidationError> {
        Ok(Self {
            statuses: BTreeMap::new(),
            gauges: ResourceGauges::default(),
            chart: ChartBuffer::new(chart_capacity)?,
        })
    }

    #[must_use]
    pub fn status(&self, server_id: &ServerId) -> Option<&ServerStatus> {
        self.statuses.get(server_id)
    }

    #[must_use]
    pub fn gauges(&self) -> &ResourceGauges {
        &self.gauges
    }

    #[must_use]
    pub fn chart(&self) -> &ChartBuffer {
        &self.chart
    }

    /// Record the status of one server.
    pub fn set_status(&mut self, server_id: ServerId, status: ServerStatus) -> DashboardChange {
        self.statuses.insert(server_id.clone(), status.clone());
        DashboardChange::Status { server_id, status }
    }

    /// Apply each field of `sample` independently.
    ///
    /// Returns one change for the gauges (if any field was set) and one for
    /// the chart (if the sample carried a time-series point).
    pub fn apply_sample(&mut self, sample: &ResourceSample) -> Vec<DashboardChange> {
        let mut changes = Vec::new();
        let written = self.gauges.apply(sample);
        if !written.is_empty() {
            changes.push(DashboardChange::Gauges(written));
        }
        if let Some(point) = &sample.time_series {
            self.chart.push(point.clone());
            changes.push(DashboardChange::Chart);
        }
        changes
    }
}

type Subscriber = Box<dyn Fn(&DashboardChange, &DashboardState)>;

/// Shared, observable [`DashboardState`].
///
/// Subscribers run synchronously after every change, in subscription order.
/// They see the state read-only and must not mutate the store re-entrantly.
pub struct DashboardStore {
    state: RefCell<DashboardState>,
    subscribers: RefCell<Vec<Subscriber>>,
}

impl DashboardStore {
    #[must_use]
    pub fn new(state: DashboardState) -> Self {
        Self {
            state: RefCell::new(state),
            subscribers: RefCell::new(Vec::new()),
        }
    }

    /// Register a renderer.
    pub fn subscribe(&self, subscriber: impl Fn(&DashboardChange, &DashboardState) + 'static) {
        self.subscribers.borrow_mut().push(Box::new(subscriber));
    }

    /// Read the current state.
    pub fn with_state<R>(&self, f: impl FnOnce(&DashboardState) -> R) -> R {
        f(&self.state.borrow())
    }

    pub fn set_status(&self, server_id: ServerId, status: ServerStatus) {
        let change = self.state.borrow_mut().set_status(server_id, status);
        self.publish(&[change]);
    }

    pub fn apply_sample(&self, sample: &ResourceSample) {
        let changes = self.state.borrow_mut().apply_sample(sample);
        self.publish(&changes);
    }

    fn publish(&self, changes: &[DashboardChange]) {
        let state = self.state.borrow();
        let subscribers = self.subscribers.borrow();
        for change in changes {
            for subscriber in subscribers.iter() {
                subscriber(change, &state);
            }
        }
    }
}

impl Default for DashboardStore {
    fn default() -> Self {
        Self::new(DashboardState::default())
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use pyropanel_domain::stats::TimeSeriesPoint;

    use super::*;

    fn id(raw: &str) -> ServerId {
        ServerId::new(raw).unwrap()
    }

    fn stats_with_point(i: usize) -> ResourceSample {
        ResourceSample {
            cpu_usage: Some(i as f64),
            time_series: Some(TimeSeriesPoint {
                time: format!("t{i}"),
                cpu: i as f64,
                memory: 1.0,
            }),
            ..ResourceSample::default()
        }
    }

    #[test]
    fn should_record_latest_status() {
        let mut state = DashboardState::default();
        state.set_status(id("1"), ServerStatus::Running);
        state.set_status(id("1"), ServerStatus::Stopped);
        assert_eq!(state.status(&id("1")), Some(&ServerStatus::Stopped));
        assert_eq!(state.status(&id("2")), None);
    }

    #[test]
    fn should_report_gauge_and_chart_changes() {
        let mut state = DashboardState::default();
        let changes = state.apply_sample(&stats_with_point(3));
        assert_eq!(
            changes,
            vec![
                DashboardChange::Gauges(vec![Resource::Cpu]),
                DashboardChange::Chart
            ]
        );
        assert_eq!(state.gauges().cpu, Some(3.0));
        assert_eq!(state.chart().len(), 1);
    }

    #[test]
    fn should_not_touch_chart_without_time_series() {
        let mut state = DashboardState::default();
        let changes = state.apply_sample(&ResourceSample {
            disk_usage: Some(80.0),
            ..ResourceSample::default()
        });
        assert_eq!(changes, vec![DashboardChange::Gauges(vec![Resource::Disk])]);
        assert!(state.chart().is_empty());
    }

    #[test]
    fn should_keep_twenty_points_after_twenty_one_samples() {
        let mut state = DashboardState::new(20).unwrap();
        for i in 0..21 {
            state.apply_sample(&stats_with_point(i));
        }
        assert_eq!(state.chart().len(), 20);
        assert_eq!(state.chart().labels().next(), Some("t1"));
    }

    #[test]
    fn should_notify_subscribers_with_updated_state() {
        let store = DashboardStore::default();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        store.subscribe(move |change, state| {
            if let DashboardChange::Status { server_id, .. } = change {
                sink.borrow_mut().push(state.status(server_id).cloned());
            }
        });

        store.set_status(id("9"), ServerStatus::Error);

        assert_eq!(*seen.borrow(), vec![Some(ServerStatus::Error)]);
    }

    #[test]
    fn should_publish_nothing_for_empty_sample() {
        let store = DashboardStore::default();
        let calls = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&calls);
        store.subscribe(move |_, _| *counter.borrow_mut() += 1);

        store.apply_sample(&ResourceSample::default());

        assert_eq!(*calls.borrow(), 0);
    }
}
