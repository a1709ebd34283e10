use super::model::{Event, EventCollection};
use itertools::Itertools;

const HEADER: &str = "// 粤剧演出数据\nexport const eventsData = {";
const FOOTER: &str = "};";

/**
Renders the collection as a JS data module exporting `eventsData`.

Dates come out in ascending order. A date with one record renders on a single
line; anything more becomes a multi-line block, one record per line. The same
collection always renders to the same bytes.
*/
pub fn render_data_module(collection: &EventCollection) -> String {
    let mut lines = vec![HEADER.to_string()];

    for (date, events) in collection {
        if let [event] = events.as_slice() {
            lines.push(format!("  '{}': [{}],", date, render_record(event)));
        } else {
            lines.push(format!("  '{}': [", date));
            lines.extend(
                events
                    .iter()
                    .map(|event| format!("    {},", render_record(event))),
            );
            lines.push("  ],".to_string());
        }
    }

    lines.push(FOOTER.to_string());
    lines.iter().join("\n")
}

fn render_record(event: &Event) -> String {
    format!(
        "{{ type: '{}', troupe: '{}', city: '{}', location: '{}', content: '{}' }}",
        event.event_type, event.troupe, event.city, event.location, event.content
    )
}
