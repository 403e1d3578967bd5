//! The tick scheduler resource.
//!
//! [`Ticker`] owns every registered [`TickGroup`](crate::group::TickGroup)
//! together with its accumulated time, advances the accumulators once per
//! frame, and invokes groups whose accumulator crosses their interval. It is
//! an explicit context object inserted into the ECS world by
//! [`setup_ticker`]; there is no global instance.
//!
//! # Update Contract
//!
//! Each call to [`Ticker::update`]:
//!
//! 1. Returns immediately when the ticker is inactive
//! 2. Drains operations queued through [`TickerQueue`]
//! 3. Walks entries in registration order, skipping groups that are empty,
//!    disabled, or have `interval <= 0`
//! 4. Advances each accumulator by the unscaled delta for real-time groups,
//!    the scaled delta otherwise
//! 5. On reaching the interval, resets the accumulator to zero and invokes
//!    the group's callbacks in reverse-insertion order
//!
//! # Reentrancy
//!
//! Callbacks cannot borrow the ticker while it is updating. Mutation from
//! inside a callback goes through a [`TickerQueue`] handle; queued
//! operations are applied between callback invocations, so a callback can
//! remove itself, a sibling, or its whole group mid-firing without
//! corrupting the loop.
//!
//! # Related
//!
//! - [`crate::systems::tick::update_ticker`] – the per-frame driving system
//! - [`crate::events::group::GroupEvent`] – registration notifications

use bevy_ecs::prelude::*;
use crossbeam_channel::{Receiver, Sender, unbounded};
use log::{debug, warn};

use crate::callback::TickCallback;
use crate::events::group::GroupEvent;
use crate::group::{GroupId, TickGroup};
use crate::resources::worldtime::WorldTime;

/// One registered group and its elapsed-time accumulator.
struct ScheduleEntry {
    id: GroupId,
    group: TickGroup,
    timer: f32,
}

/// Deferred mutation applied by the ticker between callback invocations.
enum TickerOp {
    AddCallback { id: GroupId, callback: TickCallback },
    RemoveCallback { id: GroupId, callback: TickCallback },
    SetEnabled { id: GroupId, enabled: bool },
    Unregister { id: GroupId },
}

/// Scheduler and registry for all active tick groups.
#[derive(Resource)]
pub struct Ticker {
    active: bool,
    entries: Vec<ScheduleEntry>,
    next_id: u64,
    subscribers: Vec<Sender<GroupEvent>>,
    ops_tx: Sender<TickerOp>,
    ops_rx: Receiver<TickerOp>,
}

impl Default for Ticker {
    fn default() -> Self {
        Ticker::new()
    }
}

impl Ticker {
    /// Create an active ticker with no groups.
    pub fn new() -> Self {
        let (ops_tx, ops_rx) = unbounded();
        Ticker {
            active: true,
            entries: Vec::new(),
            next_id: 0,
            subscribers: Vec::new(),
            ops_tx,
            ops_rx,
        }
    }

    /// Whether automatic updates are active.
    pub fn active(&self) -> bool {
        self.active
    }

    /// Enable or disable all automatic updates.
    ///
    /// While inactive, accumulators do not advance and nothing fires.
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Register a group, taking ownership of it.
    ///
    /// Emits [`GroupEvent::Registered`] to all subscribers and returns the
    /// handle used for later access.
    pub fn register(&mut self, group: TickGroup) -> GroupId {
        let id = GroupId(self.next_id);
        self.next_id += 1;
        debug!("registering tick group '{}' as {:?}", group.params.name, id);
        let params = group.params.clone();
        self.entries.push(ScheduleEntry {
            id,
            group,
            timer: 0.0,
        });
        self.notify(GroupEvent::Registered { id, params });
        id
    }

    /// Remove a group, returning it to the caller.
    ///
    /// Emits [`GroupEvent::Unregistered`]. A stale id is a logged no-op.
    pub fn unregister(&mut self, id: GroupId) -> Option<TickGroup> {
        let Some(pos) = self.entries.iter().position(|e| e.id == id) else {
            warn!("unregister: no tick group registered under {:?}", id);
            return None;
        };
        let entry = self.entries.remove(pos);
        debug!(
            "unregistered tick group '{}' ({:?})",
            entry.group.params.name, id
        );
        self.notify(GroupEvent::Unregistered {
            id,
            params: entry.group.params.clone(),
        });
        Some(entry.group)
    }

    /// Unregister a group and drop its callbacks.
    ///
    /// Returns whether a group was registered under the id. Prefer this
    /// over [`unregister`](Ticker::unregister) when the group is not needed
    /// afterwards.
    pub fn dispose(&mut self, id: GroupId) -> bool {
        match self.unregister(id) {
            Some(mut group) => {
                group.clear();
                true
            }
            None => false,
        }
    }

    /// Unregister every group, clearing their callbacks.
    ///
    /// Subscribers receive one `Unregistered` event per group, in
    /// registration order.
    pub fn clear(&mut self) {
        while let Some(id) = self.entries.first().map(|e| e.id) {
            if let Some(mut group) = self.unregister(id) {
                group.clear();
            }
        }
    }

    /// Whether the id refers to a currently registered group.
    pub fn contains(&self, id: GroupId) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    /// Whether any registered group matches the name.
    ///
    /// Uses whitespace-insensitive comparison, see
    /// [`TickGroup::compare_name`].
    pub fn contains_name(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Find the first group with a matching name, in registration order.
    pub fn find(&self, name: &str) -> Option<GroupId> {
        self.entries
            .iter()
            .find(|e| e.group.compare_name(name))
            .map(|e| e.id)
    }

    /// Shared access to a registered group.
    pub fn group(&self, id: GroupId) -> Option<&TickGroup> {
        self.entries.iter().find(|e| e.id == id).map(|e| &e.group)
    }

    /// Mutable access to a registered group.
    pub fn group_mut(&mut self, id: GroupId) -> Option<&mut TickGroup> {
        self.entries
            .iter_mut()
            .find(|e| e.id == id)
            .map(|e| &mut e.group)
    }

    /// Ids of all registered groups, in registration order.
    pub fn group_ids(&self) -> Vec<GroupId> {
        self.entries.iter().map(|e| e.id).collect()
    }

    /// Number of registered groups.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no groups are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Reset every group's accumulator to zero.
    pub fn reset_timers(&mut self) {
        for entry in &mut self.entries {
            entry.timer = 0.0;
        }
    }

    /// Subscribe to group registration notifications.
    ///
    /// Events are sent synchronously at the point of registration or
    /// removal; the unbounded channel buffers them until read. Dropping the
    /// receiver detaches the subscription.
    pub fn subscribe(&mut self) -> Receiver<GroupEvent> {
        let (tx, rx) = unbounded();
        self.subscribers.push(tx);
        rx
    }

    /// Handle for queueing mutations from inside callbacks.
    pub fn queue(&self) -> TickerQueue {
        TickerQueue {
            tx: self.ops_tx.clone(),
        }
    }

    /// Advance all accumulators and fire groups whose interval elapsed.
    ///
    /// `dt` is the scaled frame delta, `udt` the unscaled one; each group
    /// picks one based on its `real_time` flag. Groups registered during
    /// this call are first processed on the next frame; groups unregistered
    /// during it are skipped.
    pub fn update(&mut self, dt: f32, udt: f32) {
        if !self.active {
            return;
        }
        self.apply_queued();
        if self.entries.is_empty() {
            return;
        }

        // Iterate a snapshot of ids; callbacks may unregister groups.
        let ids: Vec<GroupId> = self.entries.iter().map(|e| e.id).collect();
        for id in ids {
            let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) else {
                continue;
            };
            let params = &entry.group.params;
            if entry.group.is_empty() || !params.enabled || params.interval <= 0.0 {
                continue;
            }
            let delta = if params.real_time { udt } else { dt };
            entry.timer += delta;
            if entry.timer < params.interval {
                continue;
            }
            entry.timer = 0.0;
            self.fire(id);
        }
    }

    // Invoke one group from a snapshot of its callbacks, applying queued
    // operations after each invocation so removals take effect mid-firing.
    fn fire(&mut self, id: GroupId) {
        let Some(entry) = self.entries.iter().find(|e| e.id == id) else {
            return;
        };
        let snapshot = entry.group.snapshot();
        for cb in snapshot.iter().rev() {
            match self.entries.iter().find(|e| e.id == id) {
                // Removed by an earlier callback in this firing.
                Some(e) if !e.group.contains(cb) => continue,
                Some(_) => {}
                // The whole group was unregistered mid-firing.
                None => break,
            }
            cb.invoke();
            self.apply_queued();
        }
    }

    fn apply_queued(&mut self) {
        loop {
            let op = match self.ops_rx.try_recv() {
                Ok(op) => op,
                Err(_) => break,
            };
            self.apply_op(op);
        }
    }

    fn apply_op(&mut self, op: TickerOp) {
        match op {
            TickerOp::AddCallback { id, callback } => {
                let Some(group) = self.group_mut(id) else {
                    warn!("queued add_callback: no tick group under {:?}", id);
                    return;
                };
                group.add(callback);
            }
            TickerOp::RemoveCallback { id, callback } => {
                let Some(group) = self.group_mut(id) else {
                    warn!("queued remove_callback: no tick group under {:?}", id);
                    return;
                };
                group.remove(&callback);
            }
            TickerOp::SetEnabled { id, enabled } => {
                let Some(group) = self.group_mut(id) else {
                    warn!("queued set_enabled: no tick group under {:?}", id);
                    return;
                };
                group.params.enabled = enabled;
            }
            TickerOp::Unregister { id } => {
                // Already-gone groups are tolerated; unregister logs it.
                self.unregister(id);
            }
        }
    }

    fn notify(&mut self, event: GroupEvent) {
        // Drop subscribers whose receiver is gone.
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }
}

/// Cloneable handle for queueing ticker mutations from callbacks.
///
/// Operations are applied by the ticker at the start of the next `update`
/// or, during a firing, after the current callback returns.
#[derive(Clone)]
pub struct TickerQueue {
    tx: Sender<TickerOp>,
}

impl TickerQueue {
    /// Queue adding a callback to a group.
    pub fn add_callback(&self, id: GroupId, callback: TickCallback) {
        let _ = self.tx.send(TickerOp::AddCallback { id, callback });
    }

    /// Queue removing a callback from a group.
    pub fn remove_callback(&self, id: GroupId, callback: TickCallback) {
        let _ = self.tx.send(TickerOp::RemoveCallback { id, callback });
    }

    /// Queue toggling a group's enabled flag.
    pub fn set_enabled(&self, id: GroupId, enabled: bool) {
        let _ = self.tx.send(TickerOp::SetEnabled { id, enabled });
    }

    /// Queue unregistering a group.
    pub fn unregister(&self, id: GroupId) {
        let _ = self.tx.send(TickerOp::Unregister { id });
    }
}

/// Receiver side of the ticker's notification channel for ECS forwarding.
///
/// Created by [`setup_ticker`]; drained by
/// [`forward_group_events`](crate::systems::tick::forward_group_events).
#[derive(Resource)]
pub struct GroupEventBridge {
    /// Receiver for [`GroupEvent`] notifications.
    pub rx: Receiver<GroupEvent>,
}

/// Insert the ticker and its companion resources into the world.
///
/// This function:
/// - Inserts an active [`Ticker`]
/// - Inserts a [`GroupEventBridge`] subscribed to it
/// - Initializes `Messages<GroupEvent>` and [`WorldTime`]
pub fn setup_ticker(world: &mut World) {
    let mut ticker = Ticker::new();
    let rx = ticker.subscribe();
    world.insert_resource(ticker);
    world.insert_resource(GroupEventBridge { rx });
    world.insert_resource(Messages::<GroupEvent>::default());
    world.init_resource::<WorldTime>();
}
