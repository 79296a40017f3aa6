mod convert;
mod envelope;
