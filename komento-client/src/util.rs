use chrono::{DateTime, Datelike, TimeZone, Timelike};

use komento_api::Comment;

const SHORT_DAY: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const SHORT_MONTH: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Stable newest-first sort of top-level comments. Reply ordering is not
/// touched here, replies are already maintained most-recent-first on insert.
pub fn sort_by_recency(comments: &mut [&Comment]) {
    comments.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

/// Renders a timestamp as `Sun, 1 Jan, 2023 05:09 PM`: 12-hour clock,
/// hours and minutes zero-padded below 10, abbreviated day and month names.
/// Generic over the timezone so the UI can pass local time while tests pin
/// UTC. Midnight keeps hour 0 (`00:05 AM`), noon renders `12:30 PM`.
pub fn format_date_time<Tz: TimeZone>(date: &DateTime<Tz>) -> String {
    let day = SHORT_DAY[date.weekday().num_days_from_sunday() as usize];
    let month = SHORT_MONTH[date.month0() as usize];
    let mut hours = date.hour();
    let am_pm = if hours >= 12 { "PM" } else { "AM" };
    if hours > 12 {
        hours -= 12;
    }
    format!(
        "{}, {} {}, {} {:02}:{:02} {}",
        day,
        date.day(),
        month,
        date.year(),
        hours,
        date.minute(),
        am_pm,
    )
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use komento_api::{NodeId, NodeKind, Time};

    use super::*;

    fn comment(id: &str, date: Time) -> Comment {
        Comment {
            id: NodeId(String::from(id)),
            kind: NodeKind::Comment,
            text: String::from("text"),
            created_at: date,
            reply_ids: None,
        }
    }

    fn date(y: i32, m: u32, d: u32, h: u32, min: u32) -> Time {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    #[test]
    fn sorts_newest_first() {
        let a = comment("a", date(2023, 1, 1, 0, 0));
        let b = comment("b", date(2023, 6, 1, 0, 0));
        let c = comment("c", date(2022, 12, 31, 0, 0));
        let mut list = vec![&a, &b, &c];

        sort_by_recency(&mut list);

        let order: Vec<&str> = list.iter().map(|c| c.id.0.as_str()).collect();
        assert_eq!(order, ["b", "a", "c"]);
    }

    #[test]
    fn formats_an_afternoon_instant() {
        assert_eq!(
            format_date_time(&date(2023, 1, 1, 17, 9)),
            "Sun, 1 Jan, 2023 05:09 PM",
        );
    }

    #[test]
    fn formats_a_morning_instant_with_padding() {
        assert_eq!(
            format_date_time(&date(2023, 8, 18, 9, 7)),
            "Fri, 18 Aug, 2023 09:07 AM",
        );
    }

    #[test]
    fn midnight_keeps_hour_zero_and_noon_stays_twelve() {
        assert_eq!(
            format_date_time(&date(2023, 3, 15, 0, 5)),
            "Wed, 15 Mar, 2023 00:05 AM",
        );
        assert_eq!(
            format_date_time(&date(2023, 3, 15, 12, 30)),
            "Wed, 15 Mar, 2023 12:30 PM",
        );
    }
}
