//! Info block rendering.
//!
//! Every record renders the same three-line skeleton:
//! 1. identity (name, surname, policy number)
//! 2. stay (service type, arrival and discharge dates)
//! 3. treatment cost
//!
//! The record's [`PatientKind`] may append its own fields to line 2. Lines 1 and 3 never vary by
//! kind.

use std::sync::OnceLock;

use chrono::NaiveDate;

use crate::constants::{DATE_FORMAT, TIME_OF_DAY_FORMAT};
use crate::labels::InfoLabels;
use crate::patient::{Patient, PatientKind};

/// Shared English labels used by [`Patient::info`].
pub(crate) fn default_labels() -> &'static InfoLabels {
    static LABELS: OnceLock<InfoLabels> = OnceLock::new();
    LABELS.get_or_init(InfoLabels::english)
}

/// Renders the three-line info block for a record.
pub fn render_info(patient: &Patient, labels: &InfoLabels) -> [String; 3] {
    let identity = format!(
        "{}: {}, {}: {}, {}: {}",
        labels.name,
        patient.name(),
        labels.surname,
        patient.surname(),
        labels.policy_number,
        patient.policy_number()
    );

    let mut stay = format!(
        "{}: {}, {}: {}, {}: {}",
        labels.service_type,
        labels.service_type(patient.service_type()),
        labels.arrival_date,
        format_date(patient.arrival(), labels),
        labels.discharge_date,
        format_date(patient.discharge(), labels)
    );
    stay.push_str(&kind_suffix(patient.kind(), labels));

    let cost = format!(
        "{}: {} {}",
        labels.treatment_cost,
        patient.price(),
        labels.currency
    );

    [identity, stay, cost]
}

fn format_date(date: Option<NaiveDate>, labels: &InfoLabels) -> String {
    match date {
        Some(date) => date.format(DATE_FORMAT).to_string(),
        None => labels.date_not_set.clone(),
    }
}

/// Text appended to line 2 for a record kind. Empty for general records.
fn kind_suffix(kind: &PatientKind, labels: &InfoLabels) -> String {
    match kind {
        PatientKind::General => String::new(),
        PatientKind::Inpatient {
            department,
            room_number,
        } => format!(
            ", {}: {}, {}: {}",
            labels.department, department, labels.room_number, room_number
        ),
        PatientKind::Day {
            arrival_time,
            leave_time,
        } => format!(
            ", {}: {}, {}: {}",
            labels.exact_arrival_time,
            arrival_time.format(TIME_OF_DAY_FORMAT),
            labels.exact_leave_time,
            leave_time.format(TIME_OF_DAY_FORMAT)
        ),
        PatientKind::Ambulatory { doctor_name } => {
            format!(", {}: {}", labels.attending_doctor, doctor_name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::INFO_LINES;
    use chrono::NaiveDateTime;
    use ward_types::ServiceType;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn datetime(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        date(y, m, d).and_hms_opt(h, min, s).expect("valid time")
    }

    fn bill(patient: &mut Patient, service_type: ServiceType, price: i64) {
        patient.set_service_type(service_type);
        patient.set_price(price);
    }

    #[test]
    fn renders_general_record_in_english() {
        let mut patient = Patient::new("John", "Smith", 123546869);
        patient
            .set_dates(date(2003, 7, 15), date(2003, 7, 18))
            .expect("valid stay");
        bill(&mut patient, ServiceType::Paid, 500);

        let info = patient.info();
        assert_eq!(info.len(), INFO_LINES);
        assert_eq!(info[0], "Name: John, Surname: Smith, Policy number: 123546869");
        assert_eq!(
            info[1],
            "Service type: Paid, Arrival date: 15.07.2003, Discharge date: 18.07.2003"
        );
        assert_eq!(info[2], "Treatment cost: 500 rub.");
    }

    #[test]
    fn renders_general_record_with_russian_labels() {
        let mut patient = Patient::new("John", "Smith", 123546869);
        patient
            .set_dates(date(2003, 7, 15), date(2003, 7, 18))
            .expect("valid stay");
        bill(&mut patient, ServiceType::Paid, 500);

        let info = patient.info_with(&InfoLabels::russian());
        assert_eq!(info[0], "Имя: John, Фамилия: Smith, Номер полиса: 123546869");
        assert_eq!(
            info[1],
            "Тип обслуживания: Платное, Дата поступления: 15.07.2003, Дата выписки: 18.07.2003"
        );
        assert_eq!(info[2], "Стоимость лечения: 500 руб.");
    }

    #[test]
    fn renders_unset_stay_with_placeholder() {
        let patient = Patient::new("Kate", "Bush", 70000);
        let info = patient.info();
        assert_eq!(
            info[1],
            "Service type: Insurance, Arrival date: not set, Discharge date: not set"
        );
        assert_eq!(info[2], "Treatment cost: 0 rub.");
    }

    #[test]
    fn inpatient_appends_department_and_room() {
        let mut inpatient = Patient::inpatient("Иван", "Иванов", 12345, "Кардиология", 101);
        bill(&mut inpatient, ServiceType::Paid, 5000);
        inpatient
            .set_dates(date(2025, 4, 10), date(2025, 4, 15))
            .expect("valid stay");

        let info = inpatient.info_with(&InfoLabels::russian());
        assert_eq!(info[0], "Имя: Иван, Фамилия: Иванов, Номер полиса: 12345");
        assert_eq!(info[1], "Тип обслуживания: Платное, Дата поступления: 10.04.2025, Дата выписки: 15.04.2025, Название отделения: Кардиология, Номер палаты: 101");
        assert_eq!(info[2], "Стоимость лечения: 5000 руб.");

        let info = inpatient.info();
        assert_eq!(info[1], "Service type: Paid, Arrival date: 10.04.2025, Discharge date: 15.04.2025, Department: Кардиология, Room number: 101");
    }

    #[test]
    fn day_patient_appends_exact_times() {
        let mut day = Patient::day(
            "Анна",
            "Смирнова",
            54321,
            datetime(2025, 4, 13, 9, 0, 1),
            datetime(2025, 4, 13, 17, 0, 1),
        );
        bill(&mut day, ServiceType::Insurance, 3000);
        day.set_dates(date(2025, 4, 13), date(2025, 4, 14))
            .expect("valid stay");

        let info = day.info_with(&InfoLabels::russian());
        assert_eq!(info[0], "Имя: Анна, Фамилия: Смирнова, Номер полиса: 54321");
        assert_eq!(info[1], "Тип обслуживания: Страховое, Дата поступления: 13.04.2025, Дата выписки: 14.04.2025, Точное время прихода: 09:00:01, Точное время ухода: 17:00:01");
        assert_eq!(info[2], "Стоимость лечения: 3000 руб.");

        let info = day.info();
        assert_eq!(info[1], "Service type: Insurance, Arrival date: 13.04.2025, Discharge date: 14.04.2025, Exact arrival time: 09:00:01, Exact leave time: 17:00:01");
    }

    #[test]
    fn ambulatory_appends_attending_doctor() {
        let mut ambulatory = Patient::ambulatory("Петр", "Петров", 67890, "Доктор Сидоров");
        bill(&mut ambulatory, ServiceType::Paid, 2000);
        ambulatory
            .set_dates(date(2025, 4, 12), date(2025, 4, 13))
            .expect("valid stay");

        let info = ambulatory.info_with(&InfoLabels::russian());
        assert_eq!(info[0], "Имя: Петр, Фамилия: Петров, Номер полиса: 67890");
        assert_eq!(info[1], "Тип обслуживания: Платное, Дата поступления: 12.04.2025, Дата выписки: 13.04.2025, ФИО лечащего врача: Доктор Сидоров");
        assert_eq!(info[2], "Стоимость лечения: 2000 руб.");
    }

    #[test]
    fn kinds_only_change_line_two() {
        let kinds = [
            PatientKind::Inpatient {
                department: "Surgery".into(),
                room_number: 7,
            },
            PatientKind::Day {
                arrival_time: datetime(2025, 1, 2, 8, 30, 0),
                leave_time: datetime(2025, 1, 2, 12, 0, 0),
            },
            PatientKind::Ambulatory {
                doctor_name: "Dr Who".into(),
            },
        ];

        let mut base = Patient::new("Ada", "Lovelace", 1815);
        base.set_dates(date(2025, 1, 2), date(2025, 1, 9))
            .expect("valid stay");
        bill(&mut base, ServiceType::Insurance, 42);
        let base_info = base.info();

        for kind in kinds {
            let mut patient = Patient::with_kind("Ada", "Lovelace", 1815, kind);
            patient
                .set_dates(date(2025, 1, 2), date(2025, 1, 9))
                .expect("valid stay");
            bill(&mut patient, ServiceType::Insurance, 42);
            let info = patient.info();

            assert_eq!(info[0], base_info[0]);
            assert_eq!(info[2], base_info[2]);
            assert!(info[1].starts_with(&base_info[1]));
            assert!(info[1].len() > base_info[1].len());
        }
    }

    #[test]
    fn custom_labels_drive_rendering() {
        let labels = InfoLabels::from_yaml_str("currency: EUR\ninsurance: Covered\n")
            .expect("parse labels");
        let patient = Patient::new("Kate", "Bush", 70000);
        let info = patient.info_with(&labels);
        assert!(info[1].starts_with("Service type: Covered"));
        assert_eq!(info[2], "Treatment cost: 0 EUR");
    }
}
