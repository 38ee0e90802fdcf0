//! Change notifications fired after successful registry mutations.

use serde::{Deserialize, Serialize};

use crate::pet::{PetId, PetRecord};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum RegistryEvent {
    PetAdded(PetRecord),
    PetUpdated(PetRecord),
    PetDeleted { id: PetId },
}

impl RegistryEvent {
    pub const ADDED: &'static str = "PetAdded";
    pub const UPDATED: &'static str = "PetUpdated";
    pub const DELETED: &'static str = "PetDeleted";

    pub fn event_type(&self) -> &'static str {
        match self {
            RegistryEvent::PetAdded(_) => Self::ADDED,
            RegistryEvent::PetUpdated(_) => Self::UPDATED,
            RegistryEvent::PetDeleted { .. } => Self::DELETED,
        }
    }

    pub fn pet_id(&self) -> &PetId {
        match self {
            RegistryEvent::PetAdded(pet) | RegistryEvent::PetUpdated(pet) => &pet.id,
            RegistryEvent::PetDeleted { id } => id,
        }
    }

    pub fn encode(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parse a payload handed to a listener.
    pub fn decode(payload: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(payload)
    }
}

#[cfg(feature = "emitter")]
pub(crate) use emitter::RegistryEmitter;

#[cfg(feature = "emitter")]
mod emitter {
    use event_emitter_rs::EventEmitter;

    use super::RegistryEvent;

    /// Queues registry events and hands them to in-process listeners.
    ///
    /// Listeners run on the emitter's own threads, so delivery is
    /// asynchronous with respect to the mutating call.
    pub(crate) struct RegistryEmitter {
        event_emitter: EventEmitter,
        events_to_emit: Vec<RegistryEvent>,
    }

    impl Default for RegistryEmitter {
        fn default() -> Self {
            Self::new()
        }
    }

    impl RegistryEmitter {
        pub(crate) fn new() -> Self {
            RegistryEmitter {
                event_emitter: EventEmitter::new(),
                events_to_emit: Vec::new(),
            }
        }

        pub(crate) fn enqueue(&mut self, event: RegistryEvent) {
            self.events_to_emit.push(event);
        }

        pub(crate) fn on<F>(&mut self, event_type: &str, listener: F)
        where
            F: Fn(String) + Send + Sync + 'static,
        {
            self.event_emitter.on(event_type, listener);
        }

        pub(crate) fn emit_queued(&mut self) {
            let events: Vec<_> = self.events_to_emit.drain(..).collect();
            for event in events {
                match event.encode() {
                    Ok(payload) => {
                        self.event_emitter.emit(event.event_type(), payload);
                    }
                    Err(err) => {
                        tracing::warn!(
                            event_type = event.event_type(),
                            pet_id = %event.pet_id(),
                            error = %err,
                            "dropping registry event that failed to encode"
                        );
                    }
                }
            }
        }

        #[cfg(test)]
        pub(crate) fn queued_len(&self) -> usize {
            self.events_to_emit.len()
        }
    }

}
