/*!
# Limits and Internals

There is no compiler. A program is kept exactly as it was typed,
less the line number and surrounding blanks, and every line is scanned
again each time it runs. Errors report the line number and how far
the scan got, counting from zero at the first character of the
statement.

`RUN` takes a snapshot of the program. Jumps are resolved against the
snapshot, so lines typed while a program is paused don't matter until
the next `RUN`.

`GOSUB`, `FOR` and `DO` share one stack. Each entry remembers which
statement pushed it. `RETURN`, `NEXT` and `LOOP` only accept their
own kind of entry on top of the stack, so jumping out of the middle
of a loop leaves an entry behind that gets in the way later.

| Limit                    | Value              |
|--------------------------|--------------------|
| Line numbers             | 0 to 4294967295    |
| Stack entries            | 65535              |
| Variables                | 65535              |
| Numbers                  | 64-bit IEEE 754    |
| Nesting (parens, IF)     | 255                |

Dividing by zero gives `+Inf`, `-Inf` or `NaN` just like the hardware
does. Only `MOD` complains about a zero divisor.

Logging for the curious goes to stderr. Set `RUST_LOG=debug` to see
runs, jumps and errors, or `RUST_LOG=trace` for every line executed.
*/
