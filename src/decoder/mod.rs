// ============================================================================
// Decoder Module
// Exchange-native message schemas mapped to the book command protocol
// ============================================================================
//
// The book has no dependency on this module: it is driven purely by
// commands, and any producer that speaks the command protocol can replace
// a decoder here.

pub mod coinbase;
