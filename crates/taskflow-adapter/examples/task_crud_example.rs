/*
[INPUT]:  TASKFLOW_BASE_URL, TASKFLOW_CLIENT_ID, TASKFLOW_TOKEN environment variables
[OUTPUT]: Task list, a created task, its completion toggle, and its removal
[POS]:    Examples - record CRUD round trip
[UPDATE]: When record endpoints change
*/

use taskflow_adapter::*;

/// Example: create, complete and delete a task against a live backend
#[tokio::main]
async fn main() {
    println!("=== TaskFlow CRUD Example ===\n");

    let config = ClientConfig {
        base_url: std::env::var("TASKFLOW_BASE_URL")
            .unwrap_or_else(|_| ClientConfig::default().base_url),
        client_id: std::env::var("TASKFLOW_CLIENT_ID").unwrap_or_default(),
        ..ClientConfig::default()
    };

    let mut client = match TaskflowClient::with_config(config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    if let Ok(token) = std::env::var("TASKFLOW_TOKEN") {
        client.set_credentials(Credentials { token });
    }
    println!("✓ HTTP client created\n");

    println!("Fetching tasks...");
    match client.fetch_all().await {
        Ok(tasks) => println!("✓ {} task(s)", tasks.len()),
        Err(e) => println!("✗ Error: {} (status {})", e, e.status()),
    }

    println!("\nCreating a task...");
    let created = match client.create(&TaskInput::new("Try the TaskFlow adapter")).await {
        Ok(task) => {
            println!("✓ Created: {} ({})", task.title, task.id);
            task
        }
        Err(e) => {
            println!("✗ Error: {}", e);
            return;
        }
    };

    println!("\nCompleting it...");
    match client
        .update(&created.id, &TaskPatch::status(created.status.toggled()))
        .await
    {
        Ok(task) => println!("✓ Status is now {}", task.status),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nDeleting it...");
    match client.delete(&created.id).await {
        Ok(receipt) => println!("✓ Deleted {}", receipt.id),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ CRUD example complete");
}
