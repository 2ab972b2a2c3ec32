fn main() {
    // Host-target builds (lib + tests) skip the ESP-IDF sysenv wiring.
    #[cfg(feature = "espidf")]
    embuild::espidf::sysenv::output();
}
