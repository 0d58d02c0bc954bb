// crates/fibonrose-metrics/src/collector.rs
//
// Tracks active and completed tasks and summarizes their complexity.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use fibonrose_core::FibonroseError;

use crate::complexity::{
    calculate_complexity_score, categorize_complexity, round_to, ComplexityLevel, TaskMetrics,
};

/// Incremental counter update for an active task. `None` fields are left alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsUpdate {
    pub gas_used: Option<u64>,
    pub transaction_count: Option<u64>,
    pub contract_calls: Option<u64>,
    pub data_size: Option<u64>,
    pub network_requests: Option<u64>,
}

impl MetricsUpdate {
    fn apply(&self, metrics: &mut TaskMetrics) {
        fn add(field: &mut u64, delta: Option<u64>) {
            if let Some(d) = delta {
                *field = field.saturating_add(d);
            }
        }
        add(&mut metrics.gas_used, self.gas_used);
        add(&mut metrics.transaction_count, self.transaction_count);
        add(&mut metrics.contract_calls, self.contract_calls);
        add(&mut metrics.data_size, self.data_size);
        add(&mut metrics.network_requests, self.network_requests);
    }
}

/// Aggregate statistics across completed tasks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsSummary {
    pub total_tasks: usize,
    /// Mean complexity score, two decimals.
    pub avg_complexity_score: f64,
    /// Mean execution time in seconds, three decimals.
    pub avg_execution_time: f64,
    pub total_gas_used: u64,
    /// Count of tasks per level name. Empty when no task has completed.
    pub complexity_distribution: BTreeMap<String, usize>,
}

/// Full export document written by [`MetricsCollector::export_metrics`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsReport {
    pub generated_at: DateTime<Utc>,
    pub summary: MetricsSummary,
    pub tasks: Vec<TaskMetrics>,
}

/// Collector for blockchain task metrics.
///
/// Tasks move from active (after `start_task`) to completed (after
/// `end_task`). Completed tasks keep their completion order.
#[derive(Debug, Default)]
pub struct MetricsCollector {
    active: HashMap<String, TaskMetrics>,
    completed: Vec<TaskMetrics>,
}

impl MetricsCollector {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking a task. Restarting an active id replaces it.
    pub fn start_task(
        &mut self,
        task_id: &str,
        task_name: &str,
        metadata: BTreeMap<String, serde_json::Value>,
    ) -> &TaskMetrics {
        let mut metrics = TaskMetrics::new(task_id, task_name);
        metrics.metadata = metadata;
        if self.active.contains_key(task_id) {
            tracing::warn!("Task '{}' restarted before completion", task_id);
        }
        tracing::debug!(task_id, task_name, "Task started");
        self.active.insert(task_id.to_string(), metrics);
        &self.active[task_id]
    }

    /// Add to the counters of an active task.
    pub fn update_task(&mut self, task_id: &str, update: &MetricsUpdate) -> Result<(), FibonroseError> {
        let metrics = self.active.get_mut(task_id).ok_or_else(|| not_active(task_id))?;
        update.apply(metrics);
        Ok(())
    }

    /// Complete an active task, score it, and move it to the completed set.
    pub fn end_task(&mut self, task_id: &str) -> Result<TaskMetrics, FibonroseError> {
        let mut metrics = self.active.remove(task_id).ok_or_else(|| not_active(task_id))?;
        metrics.complete();

        let score = calculate_complexity_score(&metrics);
        let level = categorize_complexity(score);
        metrics.complexity_score = Some(score);
        metrics.complexity_level = Some(level);

        tracing::info!(
            task_id,
            task_name = %metrics.task_name,
            complexity_score = score,
            complexity_level = level.name(),
            execution_time = metrics.execution_time.unwrap_or(0.0),
            "Task completed"
        );

        match self.completed.iter_mut().find(|m| m.task_id == task_id) {
            Some(existing) => *existing = metrics.clone(),
            None => self.completed.push(metrics.clone()),
        }
        Ok(metrics)
    }

    /// Borrow an active task's metrics.
    pub fn active_task(&self, task_id: &str) -> Option<&TaskMetrics> {
        self.active.get(task_id)
    }

    /// Metrics of a completed task.
    pub fn get_task_metrics(&self, task_id: &str) -> Option<&TaskMetrics> {
        self.completed.iter().find(|m| m.task_id == task_id)
    }

    /// All completed tasks in completion order.
    pub fn get_all_metrics(&self) -> &[TaskMetrics] {
        &self.completed
    }

    /// Summary statistics over completed tasks.
    pub fn summary(&self) -> MetricsSummary {
        if self.completed.is_empty() {
            return MetricsSummary {
                total_tasks: 0,
                avg_complexity_score: 0.0,
                avg_execution_time: 0.0,
                total_gas_used: 0,
                complexity_distribution: BTreeMap::new(),
            };
        }

        let n = self.completed.len() as f64;
        let total_score: f64 = self.completed.iter().filter_map(|m| m.complexity_score).sum();
        let total_time: f64 = self.completed.iter().filter_map(|m| m.execution_time).sum();
        let total_gas = self
            .completed
            .iter()
            .fold(0u64, |acc, m| acc.saturating_add(m.gas_used));

        let complexity_distribution = ComplexityLevel::ALL
            .iter()
            .map(|&level| {
                let count = self
                    .completed
                    .iter()
                    .filter(|m| m.complexity_level == Some(level))
                    .count();
                (level.name().to_string(), count)
            })
            .collect();

        MetricsSummary {
            total_tasks: self.completed.len(),
            avg_complexity_score: round_to(total_score / n, 2),
            avg_execution_time: round_to(total_time / n, 3),
            total_gas_used: total_gas,
            complexity_distribution,
        }
    }

    /// Build the export document.
    pub fn report(&self) -> MetricsReport {
        MetricsReport {
            generated_at: Utc::now(),
            summary: self.summary(),
            tasks: self.completed.clone(),
        }
    }

    /// Write the export document as pretty JSON to `path`.
    pub fn export_metrics(&self, path: &Path) -> Result<(), FibonroseError> {
        let json = serde_json::to_string_pretty(&self.report())?;
        fs::write(path, json)?;
        tracing::info!("Exported {} task metrics to {}", self.completed.len(), path.display());
        Ok(())
    }

    /// Run `f` as a tracked task under a generated id.
    ///
    /// `f` receives an update it may fill in with the counters it observed;
    /// the update is applied before the task is completed. If `f` panics the
    /// task is still ended (without the update) before the panic propagates.
    pub fn measure<T>(
        &mut self,
        task_name: &str,
        f: impl FnOnce(&mut MetricsUpdate) -> T,
    ) -> Result<(T, TaskMetrics), FibonroseError> {
        let task_id = format!("{}_{}", task_name, Uuid::now_v7());
        self.start_task(&task_id, task_name, BTreeMap::new());

        let mut guard = EndTaskOnUnwind {
            collector: self,
            task_id,
            armed: true,
        };
        let mut update = MetricsUpdate::default();
        let output = f(&mut update);
        guard.armed = false;

        guard.collector.update_task(&guard.task_id, &update)?;
        let metrics = guard.collector.end_task(&guard.task_id)?;
        Ok((output, metrics))
    }

    /// Number of tasks started but not yet ended.
    pub fn active_count(&self) -> usize {
        self.active.len()
    }
}

/// Ends a `measure` task if the measured closure unwinds.
struct EndTaskOnUnwind<'a> {
    collector: &'a mut MetricsCollector,
    task_id: String,
    armed: bool,
}

impl Drop for EndTaskOnUnwind<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        tracing::warn!("Task '{}' panicked; ending it without counters", self.task_id);
        let _ = self.collector.end_task(&self.task_id);
    }
}

fn not_active(task_id: &str) -> FibonroseError {
    FibonroseError::NotFound(format!("task '{}' not found in active tasks", task_id))
}
