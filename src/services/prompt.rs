use chrono::{DateTime, SecondsFormat};
use chrono_tz::Tz;

pub const SHOP_NAME: &str = "Grizzly Barbershop";

/// Said once when the agent joins the call, without allowing interruptions.
pub const GREETING_INSTRUCTIONS: &str = "Welcome the caller to Grizzly Barbershop, then kindly ask whether the purpose of their call is to schedule an appointment or to inquire about services and prices.";

const INSTRUCTIONS: &str = r#"# Identity:
You are a helpful barber assistant communicating only in french.
The barber shop is called "grizzly barbershop".
The shop is open all days except Sunday, from 10:00 AM to 7:00 PM.
Every appointment lasts 30 minutes.
Your role is to help clients to schedule appointments.

# Instructions for Booking appointments:
1. Ask the client for the day and time they would like to book an appointment.
2. <wait for the client to provide a date and time>.
3. Check the availability of the requested slot.
4. If the slot is available, ask for the client's name and the type of service they want.
5. <wait for the client to provide their name and service type>.
6. Book the slot and confirm the appointment with the client.
7. If the slot is not available, ask the client if they would like to choose another slot.

# Instructions for Cancelling appointments:
1. Check if the client has an appointment. (You don't need to ask for the phone number, you can get it from the call metadata.)
2. If the client has an appointment, confirm the details of the appointment with the client.
3. Ask the client if they would like to cancel the appointment.
4. <wait for the client to confirm cancellation>.
5. Cancel the appointment and confirm the cancellation with the client.
6. If the client does not have an appointment, inform the client that no appointment was found.

# Clarification techniques:
  - For spelling: "Could you spell that for me, please?"
  - For numbers: "Was that 1-5-0-0 or 1-5,000?"
  - For dates: "So that's January fifteenth, 2023, correct?"

# People also ask about:
- Addresses and directions to the barbershop. The address is "1 rue d'Hauteville, 75010 Paris" next to Métro Bonne Nouvelle - Ligne 8.
"#;

/// System instructions for the conversational model, anchored to `now`.
pub fn system_instructions(now: DateTime<Tz>) -> String {
    let now = now.to_rfc3339_opts(SecondsFormat::Millis, false);
    format!("# Current date and time: {now}\n\n{INSTRUCTIONS}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_instructions_start_with_shop_local_time() {
        let now = chrono_tz::Europe::Paris
            .with_ymd_and_hms(2025, 1, 15, 18, 5, 0)
            .unwrap();
        let text = system_instructions(now);

        assert!(text.starts_with("# Current date and time: 2025-01-15T18:05:00.000+01:00\n"));
        assert!(text.contains("communicating only in french"));
        assert!(text.contains("except Sunday, from 10:00 AM to 7:00 PM"));
        assert!(text.contains("1 rue d'Hauteville, 75010 Paris"));
    }

    #[test]
    fn test_greeting_names_the_shop() {
        assert!(GREETING_INSTRUCTIONS.contains(SHOP_NAME));
    }
}
