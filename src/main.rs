use mongodb::bson::oid::ObjectId;
use vpnscn::{ScanTask, WorkerService};

#[tokio::main]
async fn main() {
    env_logger::init();

    let service = WorkerService::start().await.unwrap();

    for target in &service.config().targets {
        let task = ScanTask::new_ip(&ObjectId::new().to_hex(), target);
        service.enqueue(&task).await.unwrap();
        log::info!("Enqueued scan task for {}", target);
    }

    service.run().await.unwrap();
}
