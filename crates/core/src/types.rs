/// Todo identifiers are store-assigned UUIDs, opaque to callers.
pub type TodoId = uuid::Uuid;
