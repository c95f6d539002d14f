use minijinja::{Environment, context};
use napomni_models::reminder::Reminder;
use serde::Serialize;

const HOME_TEMPLATE: &str = "home.html";

pub struct Templates {
    env: Environment<'static>,
}

#[derive(Serialize)]
struct ReminderView<'a> {
    id: &'a str,
    text: &'a str,
    time: String,
}

impl<'a> From<&'a Reminder> for ReminderView<'a> {
    fn from(value: &'a Reminder) -> Self {
        Self {
            id: value.id.as_str(),
            text: &value.text,
            time: value.time.to_string(),
        }
    }
}

impl Templates {
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template("base.html", include_str!("../templates/base.html"))?;
        env.add_template(HOME_TEMPLATE, include_str!("../templates/home.html"))?;

        Ok(Self { env })
    }

    /// Renders the reminder list. `None` and an empty slice render the same way.
    pub fn render_home(&self, reminders: Option<&[Reminder]>) -> Result<String, minijinja::Error> {
        let upcoming_reminders: Vec<ReminderView> = reminders
            .unwrap_or_default()
            .iter()
            .map(ReminderView::from)
            .collect();

        self.env
            .get_template(HOME_TEMPLATE)?
            .render(context! { upcoming_reminders => upcoming_reminders })
    }
}
