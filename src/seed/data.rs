//! Datos de semilla
//! 
//! Tabla fija de registros que el cargador escribe en cada ejecución.

use chrono::{DateTime, Utc};

use crate::models::{Partner, Role, Task, TaskStatus, UserSeed, Vehicle};

/// Contraseña por defecto de las cuentas de ejemplo (solo demo)
pub const DEFAULT_PASSWORD: &str = "123456";

pub const USERS: &str = "users";
pub const VEHICLES: &str = "vehicles";
pub const PARTNERS: &str = "partners";
pub const TASKS: &str = "tasks";

pub const DRIVER_UID: &str = "driver_uid_example";
pub const DRIVER_NAME: &str = "一号司机";
pub const TRUCK_KEY: &str = "truck001";
pub const TRUCK_PLATE: &str = "AA-123-BB";

pub const SEED_USERS: [UserSeed; 3] = [
    UserSeed {
        id: "admin_uid_example",
        email: "admin@nvts.com",
        role: Role::Admin,
        name: "系统管理员",
    },
    UserSeed {
        id: "dispatcher_uid_example",
        email: "dispatcher@nvts.com",
        role: Role::Dispatcher,
        name: "任务调度员",
    },
    UserSeed {
        id: DRIVER_UID,
        email: "driver@nvts.com",
        role: Role::Driver,
        name: DRIVER_NAME,
    },
];

pub fn seed_vehicle(created_at: DateTime<Utc>) -> Vehicle {
    Vehicle {
        id: TRUCK_KEY.to_string(),
        plate: TRUCK_PLATE.to_string(),
        trailer_plate: "T-456-CC".to_string(),
        vin: "VIN1234567890ABCDE".to_string(),
        insurance_expiry: "2026-06-01".to_string(),
        annual_inspection: "2027-01-15".to_string(),
        owner_driver_id: DRIVER_UID.to_string(),
        current_driver_id: DRIVER_UID.to_string(),
        docs: Vec::new(),
        created_at,
    }
}

pub fn seed_partners(created_at: DateTime<Utc>) -> [Partner; 2] {
    [
        Partner {
            id: "partnerA".to_string(),
            name: "CPA 供应商基地".to_string(),
            contact: "老王".to_string(),
            phone: "+86 138-0000-0000".to_string(),
            address: "卡萨布兰卡 工业园区 A 座".to_string(),
            created_at,
        },
        Partner {
            id: "partnerB".to_string(),
            name: "项目工地 X".to_string(),
            contact: "小李".to_string(),
            phone: "+86 139-1111-1111".to_string(),
            address: "首都 XX 建筑工地".to_string(),
            created_at,
        },
    ]
}

/// Tarea pendiente para el conductor de ejemplo
pub fn seed_task(now: DateTime<Utc>, planned_date: String) -> Task {
    Task {
        driver_id: DRIVER_UID.to_string(),
        driver_name: DRIVER_NAME.to_string(),
        vehicle_plate: TRUCK_PLATE.to_string(),
        status: TaskStatus::Pending,
        planned_date,
        cargo_type: "CPA-CEM I 42.5".to_string(),
        weight: "30".to_string(),
        supplier: "CPA 供应商基地".to_string(),
        receiver: "项目工地 X".to_string(),
        remarks: "请注意绕行市区，走高速。".to_string(),
        created_at: now,
        updated_at: now,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::dates::is_calendar_date;
    use std::collections::HashSet;

    #[test]
    fn test_seed_users_are_unique() {
        let ids: HashSet<_> = SEED_USERS.iter().map(|u| u.id).collect();
        let emails: HashSet<_> = SEED_USERS.iter().map(|u| u.email).collect();
        assert_eq!(ids.len(), SEED_USERS.len());
        assert_eq!(emails.len(), SEED_USERS.len());
    }

    #[test]
    fn test_vehicle_dates_are_calendar_dates() {
        let vehicle = seed_vehicle(Utc::now());
        assert!(is_calendar_date(&vehicle.insurance_expiry));
        assert!(is_calendar_date(&vehicle.annual_inspection));
    }

    #[test]
    fn test_task_references_seed_driver_and_partners() {
        let now = Utc::now();
        let task = seed_task(now, "2026-10-19".to_string());
        let partners = seed_partners(now);

        assert!(SEED_USERS.iter().any(|u| u.id == task.driver_id && u.name == task.driver_name));
        assert_eq!(task.vehicle_plate, seed_vehicle(now).plate);
        assert_eq!(task.supplier, partners[0].name);
        assert_eq!(task.receiver, partners[1].name);
    }
}
