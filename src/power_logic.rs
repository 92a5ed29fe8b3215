/// Decide whether deep sleep is allowed based on the button's latest
/// classification and the inactivity policy.
///
/// Deep sleep needs both: the tracker reporting idle (no pending
/// press to lose) and the idle span exceeding the configured timeout.
pub fn deep_sleep_allowed(button_idle: bool, idle_ms: u64, idle_timeout_ms: u64) -> bool {
    if !button_idle {
        return false;
    }

    idle_ms >= idle_timeout_ms
}
