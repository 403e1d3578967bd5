//! Group lifecycle notifications.
//!
//! The [`Ticker`](crate::resources::ticker::Ticker) emits a [`GroupEvent`]
//! whenever a group is registered or unregistered. Events are delivered
//! synchronously on crossbeam channels obtained via `Ticker::subscribe`,
//! and can additionally be republished into `Messages<GroupEvent>` by
//! [`forward_group_events`](crate::systems::tick::forward_group_events) for
//! ECS consumers.

use bevy_ecs::message::Message;

use crate::group::GroupId;
use crate::params::GroupParams;

/// Notification that the set of registered groups changed.
#[derive(Message, Debug, Clone, PartialEq)]
pub enum GroupEvent {
    /// A group was added to the ticker.
    Registered {
        /// Handle of the new group.
        id: GroupId,
        /// Copy of the group's parameters at registration time.
        params: GroupParams,
    },
    /// A group was removed from the ticker.
    Unregistered {
        /// Handle the group was registered under.
        id: GroupId,
        /// Copy of the group's parameters at removal time.
        params: GroupParams,
    },
}

impl GroupEvent {
    /// The group handle this event refers to.
    pub fn id(&self) -> GroupId {
        match self {
            GroupEvent::Registered { id, .. } | GroupEvent::Unregistered { id, .. } => *id,
        }
    }

    /// The group parameters captured when the event fired.
    pub fn params(&self) -> &GroupParams {
        match self {
            GroupEvent::Registered { params, .. } | GroupEvent::Unregistered { params, .. } => {
                params
            }
        }
    }
}
