//! Modelo de Task
//! 
//! Tareas de transporte asignadas a un conductor (colección `tasks`).
//! `driver_name` y `vehicle_plate` son copias estáticas del momento de la carga.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Estado de la tarea
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Pending,
    Accepted,
    InProgress,
    Completed,
    Cancelled,
}

/// Task - la clave la genera el store al insertar
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub driver_id: String,
    pub driver_name: String,
    pub vehicle_plate: String,
    pub status: TaskStatus,
    /// `YYYY-MM-DD`
    pub planned_date: String,
    pub cargo_type: String,
    pub weight: String,
    pub supplier: String,
    pub receiver: String,
    pub remarks: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_status_wire_names() {
        assert_eq!(serde_json::to_value(TaskStatus::Pending).unwrap(), "pending");
        assert_eq!(serde_json::to_value(TaskStatus::InProgress).unwrap(), "in_progress");
    }
}
