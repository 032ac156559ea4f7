use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use kinet_group_core::{
    Ease, GroupController, GroupError, GroupSchema, Lifecycle, NodeState, SchemaResult,
    SingleController, SingleSpec, Snapshot, Timing, TransitionPlan, TransitionSpec, Value,
};

#[derive(Clone, Debug, PartialEq)]
struct Item {
    id: u32,
    x: f32,
}

fn snap(items: &[(u32, f32)]) -> Snapshot<Item> {
    Arc::from(
        items
            .iter()
            .map(|&(id, x)| Item { id, x })
            .collect::<Vec<_>>(),
    )
}

#[derive(Clone, Debug, PartialEq)]
enum Call {
    Start(u32, usize),
    Enter(u32, usize),
    Update(u32, usize),
    Leave(u32, usize),
}

#[derive(Clone, Default)]
struct CallLog(Rc<RefCell<Vec<Call>>>);

impl CallLog {
    fn push(&self, call: Call) {
        self.0.borrow_mut().push(call);
    }
    fn take(&self) -> Vec<Call> {
        std::mem::take(&mut *self.0.borrow_mut())
    }
    fn len(&self) -> usize {
        self.0.borrow().len()
    }
}

fn move_x(target: f32, duration: f32) -> TransitionPlan {
    TransitionPlan::Single(
        TransitionSpec::new(Timing {
            delay: 0.0,
            duration,
            ease: Ease::Linear,
        })
        .target("x", Value::f(target)),
    )
}

/// Schema keyed by `Item::id`. `duration: Some(ms)` animates x; `None` makes
/// every phase a no-op plan.
struct ItemSchema {
    log: CallLog,
    duration: Option<f32>,
}

impl ItemSchema {
    fn animated(log: CallLog) -> Self {
        Self {
            log,
            duration: Some(100.0),
        }
    }
    fn inert(log: CallLog) -> Self {
        Self {
            log,
            duration: None,
        }
    }
    fn plan(&self, target: f32) -> TransitionPlan {
        match self.duration {
            Some(d) => move_x(target, d),
            None => TransitionPlan::None,
        }
    }
}

impl GroupSchema for ItemSchema {
    type Datum = Item;
    type Key = u32;

    fn key(&self, datum: &Item, _index: usize) -> u32 {
        datum.id
    }

    fn start(&self, datum: &Item, index: usize) -> SchemaResult<NodeState> {
        self.log.push(Call::Start(datum.id, index));
        Ok(NodeState::from([("x", Value::f(0.0))]))
    }

    fn enter(&self, datum: &Item, index: usize) -> SchemaResult<TransitionPlan> {
        self.log.push(Call::Enter(datum.id, index));
        Ok(self.plan(datum.x))
    }

    fn update(&self, datum: &Item, index: usize) -> SchemaResult<TransitionPlan> {
        self.log.push(Call::Update(datum.id, index));
        Ok(self.plan(datum.x))
    }

    fn leave(&self, datum: &Item, index: usize) -> SchemaResult<TransitionPlan> {
        self.log.push(Call::Leave(datum.id, index));
        Ok(self.plan(-1.0))
    }
}

fn lifecycles(ctl: &GroupController<ItemSchema>) -> Vec<(u32, Lifecycle)> {
    ctl.nodes().map(|n| (n.key, n.lifecycle)).collect()
}

#[test]
fn scenario_a_growing_snapshot() {
    let log = CallLog::default();
    let mut ctl = GroupController::new(ItemSchema::animated(log.clone()));

    ctl.set_data(snap(&[(1, 1.0)]), 0.0).unwrap();
    assert_eq!(lifecycles(&ctl), vec![(1, Lifecycle::Enter)]);
    ctl.tick(200.0);
    log.take();

    ctl.set_data(snap(&[(1, 1.0), (2, 2.0)]), 200.0).unwrap();
    assert_eq!(ctl.keys(), &[1, 2]);
    assert_eq!(
        lifecycles(&ctl),
        vec![(1, Lifecycle::Update), (2, Lifecycle::Enter)]
    );
    assert_eq!(
        log.take(),
        vec![Call::Update(1, 0), Call::Start(2, 1), Call::Enter(2, 1)]
    );
}

#[test]
fn scenario_b_leaver_stays_until_settled() {
    let log = CallLog::default();
    let mut ctl = GroupController::new(ItemSchema::animated(log.clone()));

    ctl.set_data(snap(&[(1, 1.0), (2, 2.0)]), 0.0).unwrap();
    ctl.tick(200.0);

    ctl.set_data(snap(&[(2, 2.0)]), 200.0).unwrap();
    assert_eq!(ctl.keys(), &[1, 2]);
    assert_eq!(
        lifecycles(&ctl),
        vec![(1, Lifecycle::Leave), (2, Lifecycle::Update)]
    );

    // Mid-flight: the leaver is still published.
    ctl.tick(250.0);
    assert_eq!(ctl.keys(), &[1, 2]);
    assert!(ctl.is_running());

    // Settled: the leaver disappears and the clock stops.
    ctl.tick(350.0);
    assert_eq!(ctl.keys(), &[2]);
    assert!(!ctl.is_running());
}

#[test]
fn scenario_c_emptying_drains_the_group() {
    let log = CallLog::default();
    let mut ctl = GroupController::new(ItemSchema::animated(log.clone()));

    ctl.set_data(snap(&[(1, 1.0), (2, 2.0)]), 0.0).unwrap();
    ctl.tick(200.0);

    ctl.set_data(snap(&[]), 200.0).unwrap();
    assert_eq!(
        lifecycles(&ctl),
        vec![(1, Lifecycle::Leave), (2, Lifecycle::Leave)]
    );

    ctl.tick(250.0);
    assert!(!ctl.is_empty());
    ctl.tick(350.0);
    assert!(ctl.is_empty());
    assert_eq!(ctl.nodes().count(), 0);
    assert!(!ctl.is_running());
}

#[test]
fn scenario_d_teardown_cancels_everything() {
    let log = CallLog::default();
    let mut ctl = GroupController::new(ItemSchema::animated(log.clone()));

    ctl.set_data(snap(&[(1, 1.0)]), 0.0).unwrap();
    ctl.tick(50.0);
    assert!(ctl.is_running());

    ctl.teardown();
    assert!(!ctl.is_running());
    assert!(ctl.nodes().all(|n| !n.is_transitioning()));

    // Post-teardown use is silently ignored.
    log.take();
    assert!(!ctl.set_data(snap(&[(1, 1.0), (2, 2.0)]), 60.0).unwrap());
    ctl.tick(100.0);
    assert_eq!(log.len(), 0);
    assert_eq!(ctl.keys(), &[1]);
}

#[test]
fn key_set_completeness_after_merge() {
    let log = CallLog::default();
    let mut ctl = GroupController::new(ItemSchema::animated(log.clone()));

    ctl.set_data(snap(&[(1, 0.0), (2, 0.0), (3, 0.0)]), 0.0).unwrap();
    ctl.set_data(snap(&[(3, 0.0), (4, 0.0)]), 10.0).unwrap();

    let mut keys = ctl.keys().to_vec();
    keys.sort_unstable();
    assert_eq!(keys, vec![1, 2, 3, 4]);
    assert_eq!(ctl.keys().len(), 4, "each key exactly once");
}

#[test]
fn index_stability_across_phases() {
    let log = CallLog::default();
    let mut ctl = GroupController::new(ItemSchema::animated(log.clone()));

    ctl.set_data(snap(&[(1, 0.0), (2, 0.0), (3, 0.0)]), 0.0).unwrap();
    log.take();

    // Drop the middle key: leave sees its previous index, survivors see
    // their new ones.
    ctl.set_data(snap(&[(1, 0.0), (3, 0.0)]), 10.0).unwrap();
    assert_eq!(
        log.take(),
        vec![Call::Update(1, 0), Call::Leave(2, 1), Call::Update(3, 1)]
    );
}

#[test]
fn pruning_requires_a_settled_engine() {
    let log = CallLog::default();
    // Inert schema: no phase dispatches transitions, so a leaver is prunable
    // at the very first tick.
    let mut ctl = GroupController::new(ItemSchema::inert(log.clone()));

    ctl.set_data(snap(&[(1, 0.0)]), 0.0).unwrap();
    ctl.set_data(snap(&[]), 10.0).unwrap();
    assert_eq!(ctl.keys(), &[1]);

    ctl.tick(11.0);
    assert!(ctl.is_empty());
}

#[test]
fn clock_runs_iff_something_transitions() {
    let log = CallLog::default();
    let mut ctl = GroupController::new(ItemSchema::inert(log.clone()));

    // Reconciliation always restarts the clock...
    ctl.set_data(snap(&[(1, 0.0)]), 0.0).unwrap();
    assert!(ctl.is_running());

    // ...and the first tick with nothing pending stops it.
    ctl.tick(1.0);
    assert!(!ctl.is_running());

    // Ticks while Idle are no-ops.
    let before = lifecycles(&ctl);
    ctl.tick(2.0);
    assert_eq!(lifecycles(&ctl), before);
    assert!(!ctl.is_running());
}

#[test]
fn identical_snapshot_is_a_no_op() {
    let log = CallLog::default();
    let mut ctl = GroupController::new(ItemSchema::animated(log.clone()));

    let s = snap(&[(1, 1.0)]);
    assert!(ctl.set_data(Arc::clone(&s), 0.0).unwrap());
    let dispatched = log.len();

    assert!(!ctl.set_data(Arc::clone(&s), 10.0).unwrap());
    assert_eq!(log.len(), dispatched, "no new dispatches");
    assert_eq!(ctl.keys(), &[1]);
}

struct CollidingSchema;

impl GroupSchema for CollidingSchema {
    type Datum = Item;
    type Key = u32;

    fn key(&self, _datum: &Item, _index: usize) -> u32 {
        7
    }

    fn start(&self, _datum: &Item, _index: usize) -> SchemaResult<NodeState> {
        Ok(NodeState::new())
    }
}

#[test]
fn duplicate_keys_are_rejected() {
    let mut ctl = GroupController::new(CollidingSchema);
    let err = ctl
        .set_data(snap(&[(1, 0.0), (2, 0.0)]), 0.0)
        .unwrap_err();
    assert!(matches!(err, GroupError::DuplicateKey { .. }));
}

/// Fails its update callback for id 3 only.
struct FaultySchema {
    log: CallLog,
}

impl GroupSchema for FaultySchema {
    type Datum = Item;
    type Key = u32;

    fn key(&self, datum: &Item, _index: usize) -> u32 {
        datum.id
    }

    fn start(&self, _datum: &Item, _index: usize) -> SchemaResult<NodeState> {
        Ok(NodeState::from([("x", Value::f(0.0))]))
    }

    fn update(&self, datum: &Item, index: usize) -> SchemaResult<TransitionPlan> {
        if datum.id == 3 {
            return Err("update exploded".into());
        }
        self.log.push(Call::Update(datum.id, index));
        Ok(move_x(datum.x, 100.0))
    }
}

#[test]
fn callback_fault_aborts_the_rest_of_the_pass() {
    let log = CallLog::default();
    let mut ctl = GroupController::new(FaultySchema { log: log.clone() });

    ctl.set_data(snap(&[(1, 0.0), (3, 0.0)]), 0.0).unwrap();
    ctl.tick(10.0);
    log.take();

    let err = ctl
        .set_data(snap(&[(1, 5.0), (3, 5.0)]), 20.0)
        .unwrap_err();
    assert!(matches!(err, GroupError::Callback { .. }));

    // Key 1 was dispatched before the fault and keeps its transition.
    assert_eq!(log.take(), vec![Call::Update(1, 0)]);
    let transitioning: Vec<_> = ctl.nodes().map(|n| (n.key, n.is_transitioning())).collect();
    assert_eq!(transitioning, vec![(1, true), (3, false)]);
}

struct FadeSpec;

impl SingleSpec for FadeSpec {
    fn start(&self) -> SchemaResult<NodeState> {
        Ok(NodeState::from([("opacity", Value::f(0.0))]))
    }

    fn enter(&self) -> SchemaResult<TransitionPlan> {
        Ok(TransitionPlan::Single(
            TransitionSpec::new(Timing {
                delay: 0.0,
                duration: 100.0,
                ease: Ease::Linear,
            })
            .target("opacity", Value::f(1.0)),
        ))
    }

    fn leave(&self) -> SchemaResult<TransitionPlan> {
        Ok(TransitionPlan::Single(
            TransitionSpec::new(Timing {
                delay: 0.0,
                duration: 100.0,
                ease: Ease::Linear,
            })
            .target("opacity", Value::f(0.0)),
        ))
    }
}

#[test]
fn single_controller_show_hide() {
    let mut single = SingleController::new(FadeSpec);
    assert!(single.node().is_none());

    single.set_visible(true, 0.0).unwrap();
    let node = single.node().expect("visible node");
    assert_eq!(node.lifecycle, Lifecycle::Enter);

    single.tick(50.0);
    let opacity = single
        .node()
        .and_then(|n| n.state().get("opacity"))
        .and_then(|v| v.as_float())
        .unwrap();
    assert!((opacity - 0.5).abs() < 1e-4);
    single.tick(200.0);

    single.set_visible(false, 200.0).unwrap();
    assert_eq!(single.node().map(|n| n.lifecycle), Some(Lifecycle::Leave));

    // The leaver stays published through its fade-out, then disappears.
    single.tick(250.0);
    assert!(single.node().is_some());
    single.tick(350.0);
    assert!(single.node().is_none());
    assert!(!single.is_running());
}
