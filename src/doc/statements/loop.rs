/*!
# `LOOP WHILE <expression>` or `LOOP UNTIL <expression>`

## Purpose
Goes back to the line after the matching `DO` while the
expression is true, or until it becomes true.

## Remarks
The body of a `DO` block always runs at least once.

## Example
```text
10 LET N=3
20 DO
30 PRINT N;
40 LET N=N-1
50 LOOP UNTIL N=0
RUN
321
```

*/
