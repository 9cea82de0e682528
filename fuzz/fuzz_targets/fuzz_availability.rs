#![no_main]
use libfuzzer_sys::{fuzz_target, Corpus};
use week_availability::fuzzing::{run_fuzz_availability, Data};

fuzz_target!(|data: Data| -> Corpus {
    if run_fuzz_availability(data) {
        Corpus::Keep
    } else {
        Corpus::Reject
    }
});
