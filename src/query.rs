/// Split a `key=value&key=value` string into pairs
///
/// The handler is invoked once per pair, in order. Each pair is split at
/// its first `=`; a segment without `=` is skipped rather than reported.
/// The input must not carry the surrounding `?` (the parser already
/// strips it before `on_params`).
///
/// This works equally for request query strings and, in principle, for
/// form-encoded bodies. No percent-decoding is performed.
pub fn split_query<F>(params: &str, mut handler: F)
    where F: FnMut(&str, &str)
{
    for pair in params.split('&') {
        if let Some(eq) = pair.find('=') {
            handler(&pair[..eq], &pair[eq + 1..]);
        }
    }
}
