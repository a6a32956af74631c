use crate::stats::{Analysis, RequestStatus, Summary};

pub fn print_banner(url: &str, workers: usize, duration_secs: u64) {
    println!("Starting load test against {}", url);
    println!("Workers: {}, Duration: {}s", workers, duration_secs);
}

pub fn print_analysis(analysis: &Analysis) {
    println!();
    println!("Test Results:");
    match analysis {
        Analysis::NoResults => println!("No results collected"),
        Analysis::Summary(summary) => print_summary(summary),
    }
}

fn print_summary(summary: &Summary) {
    println!("Total Requests: {}", summary.total_requests);
    println!("Requests/second: {:.2}", summary.requests_per_second);
    println!("Average Latency: {:.3}s", summary.average_latency_secs);
    println!("Error Rate: {:.2}%", summary.error_rate * 100.0);
    println!(
        "Failed request statuses: {}",
        format_statuses(&summary.failed_request_statuses)
    );
}

fn format_statuses(statuses: &[RequestStatus]) -> String {
    let entries: Vec<String> = statuses.iter().map(ToString::to_string).collect();
    format!("[{}]", entries.join(", "))
}
