pub(crate) mod composite;
pub(crate) mod compositor;
pub(crate) mod output;
pub(crate) mod pipeline;
