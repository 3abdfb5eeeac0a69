mod in_memory_queue;
mod rabbitmq_connection;
mod rabbitmq_job_source;
mod rabbitmq_publisher;

pub use in_memory_queue::{
    InMemoryJobPublisher, InMemoryJobSource, Settlement, SettlementLog, in_memory_queue,
};
pub use rabbitmq_connection::{connect_rabbitmq, declare_durable_queue};
pub use rabbitmq_job_source::RabbitMqJobSource;
pub use rabbitmq_publisher::RabbitMqJobPublisher;
